use super::*;

fn backend_with(n: u32) -> (MatrixBackend<u32>, Vec<VertexId>) {
    let mut matrix = MatrixBackend::new();
    let ids = (0..n).map(|i| matrix.add_vertex(i)).collect();
    (matrix, ids)
}

fn assert_complete(matrix: &MatrixBackend<u32>) {
    for id in matrix.ids() {
        assert_eq!(matrix.row_len(id).unwrap(), matrix.len() - 1);
    }
}

#[test]
fn unconnected_vertices_hold_sentinels() {
    let (matrix, ids) = backend_with(4);
    assert_eq!(matrix.kind(), BackendKind::Matrix);
    assert_complete(&matrix);
    for &a in &ids {
        assert_eq!(matrix.degree(a).unwrap(), 0);
        assert!(matrix.neighbors(a).unwrap().is_end());
        for &b in &ids {
            assert!(matrix.raw_weight(a, b).unwrap().is_nan());
        }
    }
}

#[test]
fn rows_stay_complete_through_add_and_remove() {
    let (mut matrix, ids) = backend_with(3);
    matrix.add_edge(ids[0], ids[1], 2.0).unwrap();
    let extra = matrix.add_vertex(9);
    assert_complete(&matrix);
    assert!(matrix.raw_weight(extra, ids[0]).unwrap().is_nan());

    matrix.remove_vertex(ids[1]).unwrap();
    assert_complete(&matrix);
    assert_eq!(matrix.degree(ids[0]).unwrap(), 0);
    assert_eq!(matrix.row_len(ids[1]).unwrap_err(), GraphError::NotFound(ids[1]));
}

#[test]
fn repeated_edge_overwrites_weight() {
    let (mut matrix, ids) = backend_with(2);
    matrix.add_edge(ids[0], ids[1], 1.0).unwrap();
    matrix.add_edge(ids[1], ids[0], 7.0).unwrap();
    assert_eq!(matrix.degree(ids[0]).unwrap(), 1);
    assert_eq!(matrix.edge_count(), 1);
    assert_eq!(matrix.edge_weight(ids[0], ids[1]).unwrap(), Some(7.0));
    assert_eq!(matrix.raw_weight(ids[1], ids[0]).unwrap(), 7.0);
}

#[test]
fn zero_weight_is_an_edge() {
    let (mut matrix, ids) = backend_with(3);
    matrix.add_unweighted_edge(ids[0], ids[2]).unwrap();
    assert_eq!(matrix.edge_weight(ids[0], ids[2]).unwrap(), Some(0.0));
    assert_eq!(matrix.edge_weight(ids[0], ids[1]).unwrap(), None);
    assert_eq!(matrix.degree(ids[2]).unwrap(), 1);
}

#[test]
fn remove_edge_resets_both_cells() {
    let (mut matrix, ids) = backend_with(3);
    matrix.add_edge(ids[0], ids[1], 1.0).unwrap();
    matrix.add_edge(ids[1], ids[2], 1.0).unwrap();
    matrix.remove_edge(ids[1], ids[0]).unwrap();
    assert!(matrix.raw_weight(ids[0], ids[1]).unwrap().is_nan());
    assert!(matrix.raw_weight(ids[1], ids[0]).unwrap().is_nan());
    assert_eq!(matrix.degree(ids[1]).unwrap(), 1);

    // Removing an absent edge is a no-op.
    matrix.remove_edge(ids[0], ids[2]).unwrap();
    assert_eq!(matrix.edge_count(), 1);
}

#[test]
fn remove_vertex_prunes_neighbors() {
    let (mut matrix, ids) = backend_with(5);
    for &leaf in &ids[1..4] {
        matrix.add_edge(ids[0], leaf, 1.0).unwrap();
    }
    let removed = matrix.remove_vertex(ids[0]).unwrap();
    assert!(!removed.is_attached());
    for &leaf in &ids[1..4] {
        assert_eq!(matrix.degree(leaf).unwrap(), 0);
    }
    assert_eq!(matrix.ids(), ids[1..].to_vec());
}

#[test]
fn validation_happens_before_writes() {
    let (mut matrix, ids) = backend_with(2);
    let ghost = VertexId::new();
    assert_eq!(matrix.add_edge(ids[0], ghost, 1.0).unwrap_err(), GraphError::NotFound(ghost));
    assert_eq!(matrix.add_edge(ids[1], ids[1], 1.0).unwrap_err(), GraphError::SelfLoop(ids[1]));
    assert!(matches!(
        matrix.add_edge(ids[0], ids[1], NO_EDGE),
        Err(GraphError::InvalidWeight { .. })
    ));
    assert_eq!(matrix.edge_count(), 0);
    assert_complete(&matrix);
}

#[test]
fn vertices_enumerate_by_insertion_and_neighbors_by_identity() {
    let (mut matrix, ids) = backend_with(6);
    for &other in ids[1..].iter().rev() {
        matrix.add_edge(ids[0], other, 1.0).unwrap();
    }
    assert_eq!(matrix.ids(), ids);

    let mut sorted = ids[1..].to_vec();
    sorted.sort();
    let order: Vec<_> = matrix.neighbors(ids[0]).unwrap().map(Vertex::id).collect();
    assert_eq!(order, sorted);
}

#[test]
fn reinserted_vertex_gets_a_fresh_row_and_identity() {
    let (mut matrix, ids) = backend_with(3);
    matrix.add_edge(ids[0], ids[2], 1.0).unwrap();
    let handle = matrix.get_vertex(ids[2]).unwrap().handle();

    let vertex = matrix.remove_vertex(ids[2]).unwrap();
    let id = matrix.insert_vertex(vertex);
    assert_ne!(id, ids[2]);
    assert_complete(&matrix);
    assert_eq!(matrix.degree(id).unwrap(), 0);
    assert_eq!(matrix.ids().last(), Some(&id));

    assert_eq!(matrix.row_len(ids[2]).unwrap_err(), GraphError::NotFound(ids[2]));
    assert_eq!(matrix.raw_weight(ids[0], ids[2]).unwrap_err(), GraphError::NotFound(ids[2]));
    assert_eq!(handle.resolve(&matrix).unwrap_err(), GraphError::Detached(ids[2]));
}
