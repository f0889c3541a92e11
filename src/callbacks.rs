//! Ready-made closures for [`traverse`](crate::graph::traverse) and
//! [`Backend::remove_if`].
//!
//! Mutators (`add`, `multiply`, `increment`, `decrement`) rewrite a vertex
//! payload in place. Predicates (`less_than`, `greater_than`, `equal_to`)
//! compare it against a captured value. The printers hand back
//! [`traverse_with`](crate::graph::traverse_with) callbacks because the
//! longer layouts need the backend for the vertex degree.
//!
//! ```
//! use duograph::callbacks::{greater_than, increment};
//! use duograph::{Algorithm, Backend, Graph, VisitPolicy};
//!
//! let mut graph = Graph::<i32>::list();
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(5);
//! graph.add_unweighted_edge(a, b).unwrap();
//!
//! graph.traverse(None, Algorithm::Bfs, VisitPolicy::All, increment()).unwrap();
//! assert_eq!(graph.remove_if(greater_than(3_i32)).unwrap(), 1);
//! assert_eq!(*graph.get_vertex(a).unwrap().payload(), 2);
//! ```

use core::fmt;
use core::ops::{AddAssign, MulAssign, SubAssign};

use num_traits::One;

use crate::error::Result;
use crate::format::{VertexDisplay, VertexFormat};
use crate::graph::{Backend, Vertex, VertexId};

/// Adds `amount` to each payload.
pub fn add<T, P>(amount: P) -> impl Fn(&mut Vertex<T>)
where
    T: AddAssign<P>,
    P: Clone,
{
    move |vertex| *vertex.payload_mut() += amount.clone()
}

/// Multiplies each payload by `factor`.
pub fn multiply<T, P>(factor: P) -> impl Fn(&mut Vertex<T>)
where
    T: MulAssign<P>,
    P: Clone,
{
    move |vertex| *vertex.payload_mut() *= factor.clone()
}

/// Adds one to the payload.
pub fn increment<T: AddAssign + One>() -> impl Fn(&mut Vertex<T>) {
    |vertex| *vertex.payload_mut() += T::one()
}

/// Subtracts one from the payload.
pub fn decrement<T: SubAssign + One>() -> impl Fn(&mut Vertex<T>) {
    |vertex| *vertex.payload_mut() -= T::one()
}

/// `payload < bound`
pub fn less_than<T, P>(bound: P) -> impl Fn(&Vertex<T>) -> bool
where
    T: PartialOrd<P>,
{
    move |vertex| *vertex.payload() < bound
}

/// `payload > bound`
pub fn greater_than<T, P>(bound: P) -> impl Fn(&Vertex<T>) -> bool
where
    T: PartialOrd<P>,
{
    move |vertex| *vertex.payload() > bound
}

/// `payload == value`
pub fn equal_to<T, P>(value: P) -> impl Fn(&Vertex<T>) -> bool
where
    T: PartialEq<P>,
{
    move |vertex| *vertex.payload() == value
}

/// Prints each visited vertex to stdout, one per line.
pub fn print<B>(format: VertexFormat) -> impl FnMut(&mut B, VertexId) -> Result<()>
where
    B: Backend + ?Sized,
    B::Payload: fmt::Display,
{
    move |backend, id| {
        println!("{}", VertexDisplay::new(&*backend, id, format)?);
        Ok(())
    }
}

/// Appends each visited vertex to `out`, one per line.
pub fn print_into<'a, B>(
    out: &'a mut String,
    format: VertexFormat,
) -> impl FnMut(&mut B, VertexId) -> Result<()> + 'a
where
    B: Backend + ?Sized + 'a,
    B::Payload: fmt::Display,
{
    move |backend, id| {
        let line = VertexDisplay::new(&*backend, id, format)?;
        out.push_str(&format!("{line}\n"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{traverse, traverse_with, Algorithm, ListBackend, MatrixBackend, VisitPolicy};

    fn chain(payloads: &[i64]) -> (ListBackend<i64>, Vec<VertexId>) {
        let mut list = ListBackend::new();
        let ids: Vec<_> = payloads.iter().map(|&p| list.add_vertex(p)).collect();
        for pair in ids.windows(2) {
            list.add_unweighted_edge(pair[0], pair[1]).unwrap();
        }
        (list, ids)
    }

    fn payloads(list: &ListBackend<i64>) -> Vec<i64> {
        list.vertices().map(|v| *v.payload()).collect()
    }

    #[test]
    fn mutators_rewrite_payloads() {
        let (mut list, _) = chain(&[1, 2, 3]);
        traverse(&mut list, None, Algorithm::Bfs, VisitPolicy::All, add(10_i64)).unwrap();
        assert_eq!(payloads(&list), vec![11, 12, 13]);

        traverse(&mut list, None, Algorithm::Dfs, VisitPolicy::All, multiply(2_i64)).unwrap();
        assert_eq!(payloads(&list), vec![22, 24, 26]);

        traverse(&mut list, None, Algorithm::Bfs, VisitPolicy::All, increment()).unwrap();
        traverse(&mut list, None, Algorithm::Bfs, VisitPolicy::All, decrement()).unwrap();
        traverse(&mut list, None, Algorithm::Bfs, VisitPolicy::All, decrement()).unwrap();
        assert_eq!(payloads(&list), vec![21, 23, 25]);
    }

    #[test]
    fn predicates_drive_remove_if() {
        let (mut list, ids) = chain(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(list.remove_if(less_than(3_i64)).unwrap(), 2);
        assert_eq!(list.remove_if(greater_than(8_i64)).unwrap(), 1);
        assert_eq!(list.remove_if(equal_to(5_i64)).unwrap(), 1);
        assert_eq!(payloads(&list), vec![3, 4, 6, 7, 8]);
        assert_eq!(list.degree(ids[3]).unwrap(), 1);
    }

    #[test]
    fn float_payloads() {
        let mut matrix = MatrixBackend::new();
        let a = matrix.add_vertex(1.5f64);
        traverse(&mut matrix, Some(a), Algorithm::Bfs, VisitPolicy::Related, add(0.25_f64)).unwrap();
        traverse(&mut matrix, Some(a), Algorithm::Bfs, VisitPolicy::Related, increment()).unwrap();
        assert_eq!(*matrix.get_vertex(a).unwrap().payload(), 2.75);
    }

    #[test]
    fn print_into_collects_lines() {
        let (mut list, ids) = chain(&[7, 8]);
        let mut out = String::new();
        traverse_with(
            &mut list,
            Some(ids[1]),
            Algorithm::Bfs,
            VisitPolicy::Related,
            print_into(&mut out, VertexFormat::Shortest),
        )
        .unwrap();
        assert_eq!(out, "[ 8 ]\n[ 7 ]\n");

        let mut long = String::new();
        traverse_with(
            &mut list,
            Some(ids[0]),
            Algorithm::Dfs,
            VisitPolicy::Related,
            print_into(&mut long, VertexFormat::Long),
        )
        .unwrap();
        assert!(long.starts_with(&format!("[ id: {{{}}}, data: {{7}}, size: {{1}} ]", ids[0])));
    }

    #[test]
    fn print_runs_over_a_graph() {
        let (mut list, _) = chain(&[1, 2]);
        let visited = traverse_with(
            &mut list,
            None,
            Algorithm::Bfs,
            VisitPolicy::All,
            print(VertexFormat::Short),
        )
        .unwrap();
        assert_eq!(visited, 2);
    }
}
