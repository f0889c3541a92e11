//! Text rendering for vertices and whole graphs.
//!
//! Three layouts are available:
//! - [`VertexFormat::Shortest`]: `[ payload ]`
//! - [`VertexFormat::Short`]: `[ id: {ab...yz}, data: {payload}, size: {degree} ]`
//!   with only the first and last two characters of the identity
//! - [`VertexFormat::Long`]: as `Short` with the full identity
//!
//! The braces are part of the output. `Short` and `Long` need the vertex degree, which only the
//! backend knows, so they go through [`VertexDisplay`] rather than
//! `Display for Vertex`.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::{Backend, Vertex, VertexId};

/// Vertex layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexFormat {
    /// Payload only.
    #[default]
    Shortest,
    /// Abbreviated identity, payload and degree.
    Short,
    /// Full identity, payload and degree.
    Long,
}

impl FromStr for VertexFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortest" => Ok(Self::Shortest),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(format!("unknown vertex format `{other}`")),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.payload())
    }
}

/// Renders one vertex of a backend in a chosen layout.
pub struct VertexDisplay<'a, B: ?Sized> {
    backend: &'a B,
    id: VertexId,
    format: VertexFormat,
}

impl<'a, B: Backend + ?Sized> VertexDisplay<'a, B> {
    /// Renders the vertex `id` of `backend` using `format`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`](crate::GraphError::NotFound) if `id` is absent.
    pub fn new(backend: &'a B, id: VertexId, format: VertexFormat) -> crate::Result<Self> {
        backend.get_vertex(id)?;
        Ok(Self { backend, id, format })
    }
}

fn abbreviate(id: VertexId) -> String {
    let full = id.to_string();
    format!("{}...{}", &full[..2], &full[full.len() - 2..])
}

impl<B> fmt::Display for VertexDisplay<'_, B>
where
    B: Backend + ?Sized,
    B::Payload: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Ok(vertex), Ok(degree)) = (self.backend.get_vertex(self.id), self.backend.degree(self.id)) else {
            return Err(fmt::Error);
        };
        match self.format {
            VertexFormat::Shortest => write!(f, "{vertex}"),
            VertexFormat::Short => write!(
                f,
                "[ id: {{{}}}, data: {{{}}}, size: {{{}}} ]",
                abbreviate(self.id),
                vertex.payload(),
                degree
            ),
            VertexFormat::Long => write!(
                f,
                "[ id: {{{}}}, data: {{{}}}, size: {{{}}} ]",
                self.id,
                vertex.payload(),
                degree
            ),
        }
    }
}

/// Renders every vertex of a backend, one per line, in enumeration order.
pub struct GraphDisplay<'a, B: ?Sized> {
    backend: &'a B,
    format: VertexFormat,
}

impl<'a, B: Backend + ?Sized> GraphDisplay<'a, B> {
    /// Renders every vertex of `backend` using `format`.
    pub fn new(backend: &'a B, format: VertexFormat) -> Self {
        Self { backend, format }
    }
}

impl<B> fmt::Display for GraphDisplay<'_, B>
where
    B: Backend + ?Sized,
    B::Payload: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.backend.vertices() {
            let line = VertexDisplay {
                backend: self.backend,
                id: vertex.id(),
                format: self.format,
            };
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
