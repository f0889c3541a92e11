use std::collections::{HashMap, HashSet};

use duograph::{Algorithm, Backend, ListBackend, MatrixBackend, VertexId, VisitPolicy};
use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{Bfs, Walker};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex,
    AddEdge(u8, u8, u8),
    RemoveVertex(u8),
    RemoveEdge(u8, u8),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => Just(Operation::AddVertex),
            4 => (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(a, b, w)| Operation::AddEdge(a, b, w)),
            1 => any::<u8>().prop_map(Operation::RemoveVertex),
            1 => (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::RemoveEdge(a, b)),
        ],
        1..120,
    )
}

/// Mirror of the graph in petgraph, used as the reference model.
struct Model {
    graph: StableUnGraph<VertexId, ()>,
    index: HashMap<VertexId, NodeIndex>,
    live: Vec<VertexId>,
    parallel: bool,
}

impl Model {
    fn new(parallel: bool) -> Self {
        Self {
            graph: StableUnGraph::default(),
            index: HashMap::new(),
            live: Vec::new(),
            parallel,
        }
    }

    fn pick(&self, n: u8) -> Option<VertexId> {
        if self.live.is_empty() {
            None
        } else {
            Some(self.live[n as usize % self.live.len()])
        }
    }
}

fn apply<B: Backend<Payload = u32>>(backend: &mut B, model: &mut Model, ops: &[Operation]) {
    for (step, op) in ops.iter().enumerate() {
        match *op {
            Operation::AddVertex => {
                let id = backend.add_vertex(step as u32);
                let node = model.graph.add_node(id);
                model.index.insert(id, node);
                model.live.push(id);
            }
            Operation::AddEdge(a, b, w) => {
                let (Some(a), Some(b)) = (model.pick(a), model.pick(b)) else { continue };
                let result = backend.add_edge(a, b, f64::from(w));
                if a == b {
                    assert!(result.is_err());
                    continue;
                }
                result.unwrap();
                let (na, nb) = (model.index[&a], model.index[&b]);
                if model.parallel {
                    model.graph.add_edge(na, nb, ());
                } else {
                    model.graph.update_edge(na, nb, ());
                }
            }
            Operation::RemoveVertex(n) => {
                let Some(id) = model.pick(n) else { continue };
                backend.remove_vertex(id).unwrap();
                let node = model.index.remove(&id).unwrap();
                model.graph.remove_node(node);
                model.live.retain(|&live| live != id);
            }
            Operation::RemoveEdge(a, b) => {
                let (Some(a), Some(b)) = (model.pick(a), model.pick(b)) else { continue };
                backend.remove_edge(a, b).unwrap();
                let (na, nb) = (model.index[&a], model.index[&b]);
                while let Some(edge) = model.graph.find_edge(na, nb) {
                    model.graph.remove_edge(edge);
                }
            }
        }
    }
}

fn check<B: Backend<Payload = u32>>(backend: &B, model: &Model) {
    assert_eq!(backend.len(), model.live.len());
    assert_eq!(backend.ids(), model.live);

    for &id in &model.live {
        let node = model.index[&id];
        assert_eq!(backend.degree(id).unwrap(), model.graph.edges(node).count());

        let ours: HashSet<VertexId> = backend.neighbors(id).unwrap().map(|v| v.id()).collect();
        let theirs: HashSet<VertexId> = model.graph.neighbors(node).map(|n| model.graph[n]).collect();
        assert_eq!(ours, theirs);

        for &other in &ours {
            assert!(backend.neighbors(other).unwrap().any(|v| v.id() == id));
        }
    }

    if let Some(&start) = model.live.first() {
        let reachable: HashSet<VertexId> = Bfs::new(&model.graph, model.index[&start])
            .iter(&model.graph)
            .map(|n| model.graph[n])
            .collect();
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
            let related = duograph::visit_order(backend, None, algorithm, VisitPolicy::Related).unwrap();
            assert_eq!(related.len(), reachable.len());
            assert_eq!(related.iter().copied().collect::<HashSet<_>>(), reachable);

            let all = duograph::visit_order(backend, None, algorithm, VisitPolicy::All).unwrap();
            assert_eq!(all.len(), model.live.len());
            let tail: Vec<VertexId> = model
                .live
                .iter()
                .copied()
                .filter(|id| !reachable.contains(id))
                .collect();
            assert_eq!(&all[related.len()..], tail.as_slice());
        }
    }
}

proptest! {
    #[test]
    fn list_backend_matches_reference(ops in operations()) {
        let mut list = ListBackend::new();
        let mut model = Model::new(true);
        apply(&mut list, &mut model, &ops);
        check(&list, &model);
    }

    #[test]
    fn matrix_backend_matches_reference(ops in operations()) {
        let mut matrix = MatrixBackend::new();
        let mut model = Model::new(false);
        apply(&mut matrix, &mut model, &ops);
        check(&matrix, &model);

        for &id in &model.live {
            assert_eq!(matrix.row_len(id).unwrap(), model.live.len() - 1);
        }
    }
}
