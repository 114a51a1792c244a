use anyhow::Context as _;
use anyhow::Result;
use itertools::Itertools as _;
use playground_data::BoundaryMatrix;
use playground_data::Grid;
use playground_data::Point2D;
use playground_data::DENSITY;
use playground_data::POINT_DOMAIN;
use std::io;

const USAGE: &str = "Usage: boundary [options] [out-matrix] >out.matrix";

fn write_matrix<W>(mut w: W, matrix: &BoundaryMatrix) -> io::Result<()>
where
    W: io::Write,
{
    for row in matrix.row_iter() {
        writeln!(w, "{}", row.iter().join(" "))?;
    }
    Ok(())
}

fn write_points<W>(mut w: W, points: &[Point2D]) -> io::Result<()>
where
    W: io::Write,
{
    for p in points {
        writeln!(w, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optopt("N", "node", "id of the node to sample (default: x)", "ID");
    options.optopt(
        "D",
        "density",
        "number of cells per side of the grid (default: 100)",
        "DENSITY",
    );
    options.optflag("", "discretize", "collapse outputs to -1 or 1");
    options.optopt(
        "r",
        "reduce",
        "average blocks of FACTOR×FACTOR cells",
        "FACTOR",
    );
    options.optflag(
        "",
        "points",
        "print the coordinates of the grid cells instead",
    );

    let matches = playground_tools::parse_args(options, USAGE, 1)?;
    let _chrome_trace_guard = playground_tools::init_tracing(&matches);

    let density = playground_tools::opt_or(&matches, "D", DENSITY)?;
    let grid = Grid::new(density, POINT_DOMAIN).context("invalid grid")?;

    let mut output = playground_tools::writer(matches.free.first())?;

    if matches.opt_present("points") {
        return write_points(&mut output, &grid.sample_points())
            .context("failed to write grid points");
    }

    let nodes = playground_data::input_nodes();
    let node = matches.opt_str("N").unwrap_or_else(|| String::from("x"));
    if !nodes.iter().any(|n| n.id() == node) {
        let known = nodes.iter().map(|n| n.id()).join(", ");
        anyhow::bail!("unknown node {node:?}, expected one of: {known}");
    }

    let discretize = matches.opt_present("discretize");
    let cache = playground_data::update_decision_boundary(None, grid, &nodes, None, discretize)
        .context("failed to sample the boundary")?;
    let matrix = cache
        .get(&node)
        .with_context(|| format!("node {node:?} was not sampled"))?;

    let factor = matches
        .opt_get::<usize>("r")
        .context("invalid value for option 'reduce'")?;
    let matrix = match factor {
        Some(factor) => playground_data::reduce_matrix(matrix, factor)
            .context("failed to reduce the boundary")?,
        None => matrix.clone(),
    };

    write_matrix(&mut output, &matrix).context("failed to write boundary")
}
