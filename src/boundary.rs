//! Decision boundary sampling.
//!
//! A boundary is the output of a node (an input function or a unit of a
//! trained model) sampled on a square grid of `density × density` cells.
//! Row 0 of a boundary matrix holds the highest `y`, columns go from the
//! lowest to the highest `x`, and cells are visited row by row.

use crate::Error;
use crate::LinearScale;
use crate::Point2D;
use crate::POINT_DOMAIN;
use itertools::iproduct;
use itertools::Itertools as _;
use nalgebra::DMatrix;
use std::fmt;
use std::num::NonZeroUsize;

/// Default number of cells per grid side.
pub const DENSITY: usize = 100;

const DEFAULT_DENSITY: NonZeroUsize = match NonZeroUsize::new(DENSITY) {
    Some(density) => density,
    None => panic!("DENSITY must be strictly positive"),
};

/// The sampled outputs of one node, indexed by `(row, col)`.
pub type BoundaryMatrix = DMatrix<f64>;

/// Collapses a node output to `1.0` when it is positive or zero, `-1.0`
/// otherwise.
pub fn discretize(value: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn finish(value: f64, discretized: bool) -> f64 {
    if discretized {
        discretize(value)
    } else {
        value
    }
}

/// A square sampling grid laid over `domain × domain`.
///
/// # Example
///
/// ```rust
/// # use playground_data::Grid;
/// # use playground_data::Point2D;
/// let grid = Grid::new(2, [-6.0, 6.0]).unwrap();
/// assert_eq!(
///     grid.sample_points(),
///     [
///         Point2D::new(-6.0, 6.0),
///         Point2D::new(6.0, 6.0),
///         Point2D::new(-6.0, -6.0),
///         Point2D::new(6.0, -6.0),
///     ],
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Grid {
    density: NonZeroUsize,
    domain: [f64; 2],
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            domain: POINT_DOMAIN,
        }
    }
}

impl Grid {
    pub fn new(density: usize, domain: [f64; 2]) -> Result<Self, Error> {
        let density = NonZeroUsize::new(density).ok_or(Error::ZeroDensity)?;
        Ok(Self { density, domain })
    }

    pub fn density(&self) -> usize {
        usize::from(self.density)
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn cell_count(&self) -> usize {
        self.density() * self.density()
    }

    /// Maps column indices onto `x` coordinates.
    pub fn x_scale(&self) -> LinearScale {
        let last = (self.density() - 1) as f64;
        LinearScale::new([0.0, last], self.domain)
    }

    /// Maps row indices onto `y` coordinates, row 0 being the highest.
    pub fn y_scale(&self) -> LinearScale {
        let last = (self.density() - 1) as f64;
        LinearScale::new([last, 0.0], self.domain)
    }

    /// The coordinates of the cell at `(row, col)`.
    pub fn point(&self, row: usize, col: usize) -> Point2D {
        Point2D::new(self.x_scale().scale(col), self.y_scale().scale(row))
    }

    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.density() + col
    }

    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let density = self.density();
        (index / density, index % density)
    }

    /// The coordinates of every cell, in row-major order.
    ///
    /// Point `i` is the cell at `self.position_of(i)`.  Use this list to
    /// query a model in bulk, then [`Grid::from_flat_predictions`] to turn
    /// its answers back into a matrix.
    pub fn sample_points(&self) -> Vec<Point2D> {
        let x_scale = self.x_scale();
        let y_scale = self.y_scale();
        let density = self.density();
        iproduct!(0..density, 0..density)
            .map(|(row, col)| Point2D::new(x_scale.scale(col), y_scale.scale(row)))
            .collect()
    }

    /// Reshapes row-major predictions into a boundary matrix.
    pub fn from_flat_predictions(
        &self,
        values: &[f64],
        discretized: bool,
    ) -> Result<BoundaryMatrix, Error> {
        if values.len() != self.cell_count() {
            return Err(Error::InputLenMismatch {
                expected: self.cell_count(),
                actual: values.len(),
            });
        }
        let density = self.density();
        Ok(DMatrix::from_fn(density, density, |row, col| {
            finish(values[self.index_of(row, col)], discretized)
        }))
    }
}

/// A named scalar function of the two input coordinates.
pub struct Node {
    id: String,
    label: String,
    f: Box<dyn Fn(f64, f64) -> f64>,
}

impl Node {
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            f: Box::new(f),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name, for display.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn eval(&self, x: f64, y: f64) -> f64 {
        (self.f)(x, y)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The seven input features a network can be fed with.
pub fn input_nodes() -> Vec<Node> {
    vec![
        Node::new("x", "X_1", |x, _| x),
        Node::new("y", "X_2", |_, y| y),
        Node::new("xSquared", "X_1^2", |x, _| x * x),
        Node::new("ySquared", "X_2^2", |_, y| y * y),
        Node::new("xTimesY", "X_1X_2", |x, y| x * y),
        Node::new("sinX", "sin(X_1)", |x, _| f64::sin(x)),
        Node::new("sinY", "sin(X_2)", |_, y| f64::sin(y)),
    ]
}

/// Anything that computes node outputs at a point, such as a trained
/// network.
///
/// [`BoundaryCache::refill`] calls [`Evaluator::forward`] once per grid
/// cell, then reads every node it knows about with [`Evaluator::output`].
pub trait Evaluator {
    /// Ids of the nodes this evaluator computes.
    fn node_ids(&self) -> Vec<&str>;

    fn forward(&mut self, point: Point2D);

    /// Output of node `id` at the last point given to `forward`.
    fn output(&self, id: &str) -> Option<f64>;
}

/// Evaluates a fixed list of [`Node`]s.
#[derive(Clone, Copy, Debug)]
pub struct Inputs<'a> {
    nodes: &'a [Node],
    point: Point2D,
}

impl<'a> Inputs<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            nodes,
            point: Point2D::zeros(),
        }
    }
}

impl Evaluator for Inputs<'_> {
    fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    fn forward(&mut self, point: Point2D) {
        self.point = point;
    }

    fn output(&self, id: &str) -> Option<f64> {
        let node = self.nodes.iter().find(|node| node.id == id)?;
        Some(node.eval(self.point.x, self.point.y))
    }
}

/// One boundary matrix per node, in allocation order.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryCache {
    grid: Grid,
    matrices: Vec<(String, BoundaryMatrix)>,
}

impl BoundaryCache {
    /// Allocates a zeroed matrix for each of the given node ids.
    pub fn allocate<I>(grid: Grid, ids: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Err(Error::NoNodes);
        }
        if let Some(id) = ids.iter().duplicates().next() {
            return Err(Error::DuplicateNode { id: id.clone() });
        }

        tracing::info!(
            density = grid.density(),
            nodes = ids.len(),
            "allocating boundary cache"
        );

        let density = grid.density();
        let matrices = ids
            .into_iter()
            .map(|id| (id, DMatrix::zeros(density, density)))
            .collect();
        Ok(Self { grid, matrices })
    }

    /// Samples `evaluator` on every cell of the grid.
    ///
    /// Only the matrices of nodes the evaluator reports are written; the
    /// others keep their values.
    pub fn refill(&mut self, evaluator: &mut dyn Evaluator, discretized: bool) {
        let targets: Vec<usize> = {
            let known = evaluator.node_ids();
            self.matrices
                .iter()
                .positions(|(id, _)| known.contains(&id.as_str()))
                .collect()
        };

        tracing::debug!(nodes = targets.len(), discretized, "refilling boundary cache");

        let x_scale = self.grid.x_scale();
        let y_scale = self.grid.y_scale();
        let density = self.grid.density();
        for (row, col) in iproduct!(0..density, 0..density) {
            evaluator.forward(Point2D::new(x_scale.scale(col), y_scale.scale(row)));
            for &t in &targets {
                let (id, matrix) = &mut self.matrices[t];
                if let Some(value) = evaluator.output(id) {
                    matrix[(row, col)] = finish(value, discretized);
                }
            }
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.matrices.iter().map(|(id, _)| id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&BoundaryMatrix> {
        self.matrices
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, matrix)| matrix)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut BoundaryMatrix> {
        self.matrices
            .iter_mut()
            .find(|(node, _)| node == id)
            .map(|(_, matrix)| matrix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoundaryMatrix)> + '_ {
        self.matrices
            .iter()
            .map(|(id, matrix)| (id.as_str(), matrix))
    }
}

/// Samples node outputs on `grid`.
///
/// Without a `cache`, a new one is allocated for `nodes` (and the nodes of
/// `model`, if any) and filled from `nodes`.  A given cache is reused as is
/// and `nodes` are not evaluated again.  It must have been allocated for
/// `grid`, otherwise [`Error::GridMismatch`] is returned.
///
/// In both cases, `model` then refills the matrices of its own nodes.
///
/// # Example
///
/// ```rust
/// # use playground_data::*;
/// let grid = Grid::new(10, POINT_DOMAIN).unwrap();
/// let nodes = input_nodes();
///
/// let cache = update_decision_boundary(None, grid, &nodes, None, false).unwrap();
/// assert_eq!(cache.len(), 7);
/// assert_eq!(cache.get("x").unwrap()[(0, 0)], -6.0);
///
/// let again = update_decision_boundary(Some(cache.clone()), grid, &nodes, None, false).unwrap();
/// assert_eq!(again, cache);
/// ```
pub fn update_decision_boundary(
    cache: Option<BoundaryCache>,
    grid: Grid,
    nodes: &[Node],
    model: Option<&mut dyn Evaluator>,
    discretized: bool,
) -> Result<BoundaryCache, Error> {
    let mut cache = match cache {
        Some(cache) if cache.grid != grid => {
            return Err(Error::GridMismatch {
                expected: cache.grid,
                actual: grid,
            });
        }
        Some(cache) => cache,
        None => {
            if nodes.is_empty() {
                return Err(Error::NoNodes);
            }
            let mut ids: Vec<String> = nodes.iter().map(|node| node.id.clone()).collect();
            if let Some(model) = model.as_deref() {
                for id in model.node_ids() {
                    if !ids.iter().any(|known| known == id) {
                        ids.push(id.to_owned());
                    }
                }
            }
            let mut cache = BoundaryCache::allocate(grid, ids)?;
            cache.refill(&mut Inputs::new(nodes), discretized);
            cache
        }
    };
    if let Some(model) = model {
        cache.refill(model, discretized);
    }
    Ok(cache)
}

/// Shrinks a square matrix by averaging `factor × factor` blocks.
pub fn reduce_matrix(matrix: &BoundaryMatrix, factor: usize) -> Result<BoundaryMatrix, Error> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if factor == 0 {
        return Err(Error::ZeroFactor);
    }
    if rows % factor != 0 {
        return Err(Error::IndivisibleReduction { len: rows, factor });
    }

    let side = rows / factor;
    Ok(DMatrix::from_fn(side, side, |row, col| {
        matrix
            .view((row * factor, col * factor), (factor, factor))
            .mean()
    }))
}
