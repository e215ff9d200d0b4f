use clap::{Parser, Subcommand};
use geo_tin::{Crs, Envelope, IndexedTin, Point3, TinError, TinSettings, Triangle};
use log::debug;

/// Parses an `x,y,z` triple.
fn parse_point(s: &str) -> Result<Point3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{}'", s));
    }
    let mut coords = [0.0; 3];
    for (c, part) in coords.iter_mut().zip(parts) {
        *c = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}': {}", part.trim(), e))?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Parses an `a,b,c` vertex index triple.
fn parse_triple(s: &str) -> Result<[usize; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected a,b,c but got '{}'", s));
    }
    let mut idx = [0; 3];
    for (i, part) in idx.iter_mut().zip(parts) {
        *i = part
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("'{}': {}", part.trim(), e))?;
    }
    Ok(idx)
}

#[derive(Parser)]
#[command(name = "geo_tin_cli", version)]
struct Cli {
    /// EPSG code attached to every input point.
    #[arg(long, global = true)]
    epsg: Option<u32>,
    /// JSON settings file; its index validation policy applies to
    /// `--triangle` triples.
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Area of the triangle A B C.
    TriangleArea {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        c: Point3,
    },
    /// Perimeter of the triangle A B C.
    TrianglePerimeter {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        c: Point3,
    },
    /// Elevation of the plane through A B C at (x, y).
    Interpolate {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        c: Point3,
    },
    /// Tests whether (x, y) lies inside the triangle A B C.
    Inside {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        include_edge: bool,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Point3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        c: Point3,
    },
    /// Bounding box of the given points.
    Envelope {
        #[arg(value_parser = parse_point, allow_hyphen_values = true, required = true)]
        points: Vec<Point3>,
    },
    /// Triangulates the points and reports the TIN elevation at (x, y).
    TinElevation {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(value_parser = parse_point, allow_hyphen_values = true, num_args = 3..)]
        points: Vec<Point3>,
    },
    /// Builds a TIN and prints size, area and elevation range. Without
    /// `--triangle` the points are triangulated.
    TinSummary {
        /// Vertex index triple; repeat for several triangles.
        #[arg(long = "triangle", value_parser = parse_triple)]
        triangles: Vec<[usize; 3]>,
        #[arg(value_parser = parse_point, allow_hyphen_values = true, num_args = 3..)]
        points: Vec<Point3>,
    },
}

fn tag(points: Vec<Point3>, crs: Option<&Crs>) -> Vec<Point3> {
    match crs {
        Some(crs) => points.into_iter().map(|p| p.with_crs(crs.clone())).collect(),
        None => points,
    }
}

fn print_envelope(env: &Envelope) {
    println!("X: [{:.3}, {:.3}]", env.x_min(), env.x_max());
    println!("Y: [{:.3}, {:.3}]", env.y_min(), env.y_max());
    println!("Z: [{:.3}, {:.3}]", env.z_min(), env.z_max());
}

/// Builds a TIN with `settings` from `points` and the given index triples,
/// or from a Delaunay triangulation of `points` when `triangles` is empty.
fn build_tin(
    points: Vec<Point3>,
    triangles: &[[usize; 3]],
    settings: &TinSettings,
) -> Result<IndexedTin, TinError> {
    let triangles = if triangles.is_empty() {
        IndexedTin::from_points(points.clone())
            .triangle_indices()
            .to_vec()
    } else {
        triangles.to_vec()
    };
    let mut tin = IndexedTin::with_settings(points.len(), triangles.len(), settings);
    for (i, p) in points.iter().enumerate() {
        tin.set_point(i, p)?;
    }
    for (i, &[a, b, c]) in triangles.iter().enumerate() {
        tin.set_triangle(i, a, b, c)?;
    }
    debug!(
        "built TIN with {} points and {} triangles",
        tin.number_of_points(),
        tin.number_of_triangles()
    );
    Ok(tin)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let crs = cli.epsg.map(Crs::from_epsg);
    let settings = match &cli.settings {
        Some(path) => TinSettings::load(path)?,
        None => TinSettings::default(),
    };
    if let Some(crs) = &crs {
        println!("Using CRS: {}", crs.definition());
    }
    match cli.command {
        Commands::TriangleArea { a, b, c } => {
            let pts = tag(vec![a, b, c], crs.as_ref());
            let tri = Triangle::new(&pts[0], &pts[1], &pts[2])?;
            println!("Area: {:.3}", tri.area());
        }
        Commands::TrianglePerimeter { a, b, c } => {
            let pts = tag(vec![a, b, c], crs.as_ref());
            let tri = Triangle::new(&pts[0], &pts[1], &pts[2])?;
            println!("Perimeter: {:.3}", tri.circumference());
        }
        Commands::Interpolate { x, y, a, b, c } => {
            let pts = tag(vec![a, b, c], crs.as_ref());
            let tri = Triangle::new(&pts[0], &pts[1], &pts[2])?;
            let z = tri.interpolate_z(&Point3::new(x, y, 0.0))?;
            println!("Z: {:.3}", z);
        }
        Commands::Inside {
            x,
            y,
            include_edge,
            a,
            b,
            c,
        } => {
            let pts = tag(vec![a, b, c], crs.as_ref());
            let tri = Triangle::new(&pts[0], &pts[1], &pts[2])?;
            let inside = tri.is_inside_xy(&Point3::new(x, y, 0.0), include_edge)?;
            println!("Inside: {}", inside);
        }
        Commands::Envelope { points } => {
            let pts = tag(points, crs.as_ref());
            let env = Envelope::from_points(&pts)?;
            print_envelope(&env);
        }
        Commands::TinElevation { x, y, points } => {
            let tin = build_tin(tag(points, crs.as_ref()), &[], &settings)?;
            match tin.elevation_at(x, y) {
                Some(z) => println!("Elevation: {:.3}", z),
                None => println!("Point ({:.3}, {:.3}) is outside the TIN", x, y),
            }
        }
        Commands::TinSummary { triangles, points } => {
            let mut tin = build_tin(tag(points, crs.as_ref()), &triangles, &settings)?;
            println!("Points: {}", tin.number_of_points());
            println!("Triangles: {}", tin.number_of_triangles());
            println!("Edges: {}", tin.wireframe().segment_count());
            print_envelope(tin.try_envelope()?);
            println!("Surface area: {:.3}", tin.surface_area()?);
            let (min, max) = (tin.minimal_elevation()?, tin.maximal_elevation()?);
            println!("Elevation: [{:.3}, {:.3}]", min, max);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
