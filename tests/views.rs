//! Lazy view integration tests.
//!
//! Verifies that the view adapters compose over real traversal output: restartable
//! iteration, front/back access, and mapped pipelines that stay lazy.

use cfgcore::{
    dfs_iter, preorder, Error, IterView, LabeledDigraph, RangeView, Result, VertexId, View,
};

fn v(i: usize) -> VertexId {
    VertexId::new(i)
}

fn diamond() -> Result<LabeledDigraph> {
    let mut graph = LabeledDigraph::new(4)?;
    graph.add_edge(v(0), v(1))?;
    graph.add_edge(v(0), v(2))?;
    graph.add_edge(v(1), v(3))?;
    graph.add_edge(v(2), v(3))?;
    Ok(graph)
}

#[test]
fn test_range_view_over_traversal_output() -> Result<()> {
    let graph = diamond()?;
    let order = preorder(&graph, v(0))?;
    let view = RangeView::new(&order);

    assert_eq!(view.len(), 4);
    assert!(!view.is_empty());
    assert_eq!(view.front()?, v(0));
    assert_eq!(view.back()?, v(2));

    // iteration restarts from the front every time
    let first: Vec<VertexId> = view.iter().collect();
    let second: Vec<VertexId> = view.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first, order);
    Ok(())
}

#[test]
fn test_empty_view_access_is_an_error() {
    let empty: [VertexId; 0] = [];
    let view = RangeView::new(&empty);

    assert!(view.is_empty());
    assert!(matches!(view.front(), Err(Error::EmptyViewAccess)));
    assert!(matches!(view.back(), Err(Error::EmptyViewAccess)));
}

#[test]
fn test_mapped_pipeline_over_successors() -> Result<()> {
    let graph = diamond()?;

    let labels = IterView::new(graph.successors(v(0))?)
        .map(|id| id.index());
    let collected: Vec<usize> = labels.iter().collect();
    assert_eq!(collected, vec![1, 2]);

    // the mapped view is as restartable as its source
    assert_eq!(labels.front()?, 1);
    assert_eq!(labels.back()?, 2);
    Ok(())
}

#[test]
fn test_lazy_traversal_behind_a_view() -> Result<()> {
    let graph = diamond()?;
    let view = IterView::new(dfs_iter(&graph, v(0))?);

    assert_eq!(view.len(), 4);
    let doubled: Vec<usize> = view.map(|id| id.index() * 2).iter().collect();
    assert_eq!(doubled, vec![0, 2, 6, 4]);
    Ok(())
}
