/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use critlinks::algo::*;
```
and gain access to traversal, connectivity, bridge detection, and criticality ranking.
Where possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bridges;
mod components;
mod partition;
mod ranking;
mod traversal;

use crate::prelude::*;

pub use bridges::*;
pub use components::*;
pub use partition::*;
pub use ranking::*;
pub use traversal::*;
