use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use helpers::input_reader::{InputReader, SliceToTuple};

use crate::{CoordT, Position, Ride, RideId, Score, TimeT};

#[derive(Clone, Debug)]
pub struct Problem {
    pub n_rows: usize,
    pub n_cols: usize,
    pub n_cars: usize,
    pub bonus: Score,
    pub n_steps: TimeT,
    pub rides: Vec<Ride>,
}

/// How the header line is read.
///
/// `Reference` reproduces the known reference outputs: only the first four
/// header values matter and the fourth one is used as both the bonus and
/// the number of steps. `Standard` is the full
/// `rows columns cars rides bonus steps` header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeaderLayout {
    Reference,
    Standard,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        HeaderLayout::Reference
    }
}

impl FromStr for HeaderLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(Self::Reference),
            "standard" => Ok(Self::Standard),
            _ => Err(format!("invalid layout: {}", s)),
        }
    }
}

struct Header {
    n_rows: usize,
    n_cols: usize,
    n_cars: usize,
    n_rides: Option<usize>,
    bonus: Score,
    n_steps: TimeT,
}

fn convert<T: TryFrom<i64>>(value: i64, what: &str, line: usize) -> Result<T> {
    T::try_from(value)
        .map_err(|_| anyhow::anyhow!("line {}: {} out of range: {}", line, what, value))
}

fn read_header(values: &[i64], layout: HeaderLayout, line: usize) -> Result<Header> {
    match layout {
        HeaderLayout::Reference => {
            let (rows, cols, cars, bonus) = match values {
                [a, b, c, d, ..] => (*a, *b, *c, *d),
                _ => bail!("line {}: header needs at least 4 values", line),
            };
            Ok(Header {
                n_rows: convert(rows, "rows", line)?,
                n_cols: convert(cols, "columns", line)?,
                n_cars: convert(cars, "cars", line)?,
                n_rides: None,
                bonus: convert(bonus, "bonus", line)?,
                n_steps: convert(bonus, "steps", line)?,
            })
        }
        HeaderLayout::Standard => {
            let (rows, cols, cars, rides, bonus, steps) = match values.tuple_6() {
                Some(t) => t,
                None => bail!("line {}: header needs 6 values, got {}", line, values.len()),
            };
            Ok(Header {
                n_rows: convert(rows, "rows", line)?,
                n_cols: convert(cols, "columns", line)?,
                n_cars: convert(cars, "cars", line)?,
                n_rides: Some(convert(rides, "rides", line)?),
                bonus: convert(bonus, "bonus", line)?,
                n_steps: convert(steps, "steps", line)?,
            })
        }
    }
}

fn read_ride(values: &[i64], id: usize, line: usize) -> Result<Ride> {
    let (a, b, x, y, s, f) = match values.tuple_6() {
        Some(t) => t,
        None => bail!("line {}: ride needs 6 values, got {}", line, values.len()),
    };

    let ride = Ride {
        id: RideId(id),
        c_start: Position(
            convert::<CoordT>(a, "coordinate", line)?,
            convert::<CoordT>(b, "coordinate", line)?,
        ),
        c_finish: Position(
            convert::<CoordT>(x, "coordinate", line)?,
            convert::<CoordT>(y, "coordinate", line)?,
        ),
        t_start: convert(s, "earliest start", line)?,
        t_finish: convert(f, "latest finish", line)?,
    };

    if ride.t_start > ride.t_finish {
        bail!(
            "line {}: earliest start {} after latest finish {}",
            line,
            ride.t_start,
            ride.t_finish
        );
    }

    Ok(ride)
}

pub fn parse_problem<R: BufRead>(reader: R, layout: HeaderLayout) -> Result<Problem> {
    let mut input = InputReader::new(reader);

    let values = match input.ints_from_line::<i64>()? {
        Some(values) => values,
        None => bail!("empty input, no header line"),
    };
    let header = read_header(&values, layout, input.line())?;

    let mut rides = Vec::with_capacity(header.n_rides.unwrap_or(0).min(1 << 16));
    while let Some(values) = input.ints_from_line::<i64>()? {
        rides.push(read_ride(&values, rides.len(), input.line())?);
    }

    if let Some(n_rides) = header.n_rides {
        if n_rides != rides.len() {
            bail!("header declares {} rides, found {}", n_rides, rides.len());
        }
    }

    Ok(Problem {
        n_rows: header.n_rows,
        n_cols: header.n_cols,
        n_cars: header.n_cars,
        bonus: header.bonus,
        n_steps: header.n_steps,
        rides,
    })
}

pub fn read_problem(file_path: impl AsRef<Path>, layout: HeaderLayout) -> Result<Problem> {
    let file_path = file_path.as_ref();
    let file = File::open(file_path)
        .with_context(|| format!("can't open problem {}", file_path.display()))?;
    parse_problem(BufReader::new(file), layout)
        .with_context(|| format!("can't read problem {}", file_path.display()))
}

/// Writes `problem` with a `Standard` header.
pub fn write_problem(problem: &Problem, mut out: impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} {} {} {} {}",
        problem.n_rows,
        problem.n_cols,
        problem.n_cars,
        problem.rides.len(),
        problem.bonus,
        problem.n_steps
    )?;
    for r in &problem.rides {
        writeln!(
            out,
            "{} {} {} {} {} {}",
            r.c_start.0, r.c_start.1, r.c_finish.0, r.c_finish.1, r.t_start, r.t_finish
        )?;
    }
    Ok(())
}
