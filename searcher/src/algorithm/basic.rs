pub use bfs::bfs;
pub use dfs::dfs;

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use log::debug;

    use crate::algorithm::cache::EnqueueCache;
    use crate::algorithm::{search, Candidate, SearchOptions, SearchQueue};
    use crate::errors::Result;
    use crate::graph::{Graph, Route};
    use crate::traits::{Label, Weight};

    #[derive(Debug)]
    pub(crate) struct BreadthQueue<N, W> {
        queue: VecDeque<Candidate<N, W>>,
    }

    impl<N, W> SearchQueue<N, W> for BreadthQueue<N, W> {
        const WEIGHTED: bool = false;

        fn pop(&mut self) -> Option<Candidate<N, W>> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Candidate<N, W>) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<N, W> Default for BreadthQueue<N, W> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first search, ignoring road weights.
    ///
    /// Nodes are marked visited when they are queued, so among several
    /// shortest paths the one discovered first wins. The route cost is the
    /// hop count, which is the fewest possible.
    pub fn bfs<N, W>(
        graph: &Graph<N, W>,
        origin: &N,
        goal: &N,
        options: &SearchOptions,
    ) -> Result<Option<Route<N, W>>>
    where
        N: Label,
        W: Weight,
    {
        debug!("bfs from {:?} to {:?}", origin, goal);
        search::<N, W, BreadthQueue<N, W>, EnqueueCache<N>>(graph, origin, goal, options)
    }
}

mod dfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use log::debug;

    use crate::algorithm::cache::EnqueueCache;
    use crate::algorithm::{search, Candidate, SearchOptions, SearchQueue};
    use crate::errors::Result;
    use crate::graph::{Graph, Route};
    use crate::traits::{Label, Weight};

    #[derive(Debug)]
    pub(crate) struct DepthQueue<N, W> {
        queue: VecDeque<Candidate<N, W>>,
    }

    impl<N, W> Default for DepthQueue<N, W> {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<N, W> SearchQueue<N, W> for DepthQueue<N, W> {
        const WEIGHTED: bool = false;

        fn pop(&mut self) -> Option<Candidate<N, W>> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Candidate<N, W>) {
            self.queue.push_front(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Depth-first search, ignoring road weights.
    ///
    /// Returns the first path found, with its hop count. Neither the path
    /// nor its length is minimal, and which path is found depends on the
    /// order of each node's roads: by default the last road listed is
    /// expanded first, and [SearchOptions::reverse_neighbors] flips that.
    pub fn dfs<N, W>(
        graph: &Graph<N, W>,
        origin: &N,
        goal: &N,
        options: &SearchOptions,
    ) -> Result<Option<Route<N, W>>>
    where
        N: Label,
        W: Weight,
    {
        debug!("dfs from {:?} to {:?}", origin, goal);
        search::<N, W, DepthQueue<N, W>, EnqueueCache<N>>(graph, origin, goal, options)
    }
}
