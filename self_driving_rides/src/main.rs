use lib::generate::{generate, GenParams};
use lib::*;
use threadpool::ThreadPool;

use anyhow::{bail, Context, Result};
use log::{error, info};

use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Instant;

const USAGE: &str = "usage:
    self_driving_rides solve [--layout reference|standard] [IN OUT]...
    self_driving_rides check [--layout reference|standard] [IN OUT]...
    self_driving_rides gen OUT SEED";

const FILES: [(&str, &str); 5] = [
    ("./input/a.txt", "./output/a.txt"),
    ("./input/b.txt", "./output/b.txt"),
    ("./input/c.txt", "./output/c.txt"),
    ("./input/d.txt", "./output/d.txt"),
    ("./input/e.txt", "./output/e.txt"),
];

fn main() -> Result<()> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    match args.get(1).map(String::as_str) {
        Some("check") => {
            let (layout, files) = parse_files(&args[2..])?;
            let mut scores = Vec::new();
            for (in_file, out_file) in &files {
                let eval = check(in_file, out_file, layout)?;
                println!(
                    "{} score: {} ({} rides, {} on time, {} late)",
                    in_file, eval.score, eval.completed, eval.on_time, eval.late
                );
                scores.push(eval.score);
            }
            println!("total {:?}", &scores.iter().sum::<Score>());
        }
        Some("solve") => {
            let (layout, files) = parse_files(&args[2..])?;
            let n_files = files.len();
            let timer = Instant::now();
            let n_failed = run_files(files, move |in_file, out_file| {
                solve_file(in_file, out_file, layout)
            });
            println!("total time: {}", timer.elapsed().as_millis());
            if n_failed > 0 {
                bail!("{} of {} files failed", n_failed, n_files);
            }
        }
        Some("gen") => match &args[2..] {
            [out_file, seed] => {
                let seed = seed
                    .parse::<u64>()
                    .with_context(|| format!("bad seed {:?}", seed))?;
                let problem = generate(&GenParams::default(), seed);
                let mut out = BufWriter::new(
                    File::create(out_file).with_context(|| format!("can't create {}", out_file))?,
                );
                write_problem(&problem, &mut out)?;
                out.flush()?;
            }
            _ => bail!("{}", USAGE),
        },
        _ => bail!("pass either check, solve or gen\n{}", USAGE),
    }

    Ok(())
}

fn parse_files(args: &[String]) -> Result<(HeaderLayout, Vec<(String, String)>)> {
    let (layout, rest) = match args {
        [flag, value, rest @ ..] if flag == "--layout" => {
            let layout = value.parse::<HeaderLayout>().map_err(anyhow::Error::msg)?;
            (layout, rest)
        }
        _ => (HeaderLayout::default(), args),
    };

    if rest.is_empty() {
        let files = FILES
            .iter()
            .map(|(i, o)| (i.to_string(), o.to_string()))
            .collect();
        return Ok((layout, files));
    }

    if rest.len() % 2 != 0 {
        bail!("input and output files come in pairs\n{}", USAGE);
    }

    let files = rest
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    Ok((layout, files))
}

/// Runs `job` for every file pair on a pool, returns how many failed.
/// A job that panics sends nothing and counts as failed.
fn run_files<F>(files: Vec<(String, String)>, job: F) -> usize
where
    F: Fn(&str, &str) -> Result<()> + Send + Sync + 'static,
{
    let n_files = files.len();
    let job = Arc::new(job);
    let pool = ThreadPool::new(5);
    let (tx, rx) = channel();
    for (in_file, out_file) in files {
        let tx = tx.clone();
        let job = job.clone();
        pool.execute(move || {
            let timer = Instant::now();
            let res = (*job)(&in_file, &out_file);
            if res.is_ok() {
                println!("{} time: {}", in_file, timer.elapsed().as_millis());
            }
            tx.send((in_file, res))
                .expect("channel will be there waiting for the pool");
        })
    }
    drop(tx);
    pool.join();

    let mut n_reported = 0;
    let mut n_failed = 0;
    for (in_file, res) in rx.iter() {
        n_reported += 1;
        if let Err(e) = res {
            error!("{}: {:#}", in_file, e);
            n_failed += 1;
        }
    }
    if n_reported < n_files {
        error!("{} files stopped without a result", n_files - n_reported);
    }

    n_failed + (n_files - n_reported)
}

fn solve_file(in_file: &str, out_file: &str, layout: HeaderLayout) -> Result<()> {
    let problem = read_problem(in_file, layout)?;
    let solution = solve(&problem);
    info!(
        "{}: {} of {} rides assigned to {} cars",
        in_file,
        solution.n_rides(),
        problem.rides.len(),
        problem.n_cars
    );

    let mut out = BufWriter::new(
        File::create(out_file).with_context(|| format!("can't create {}", out_file))?,
    );
    solution.write_solution(&mut out)?;
    out.flush()?;
    Ok(())
}

fn check(in_file: &str, out_file: &str, layout: HeaderLayout) -> Result<Evaluation> {
    let problem = read_problem(in_file, layout)?;
    let file = File::open(out_file).with_context(|| format!("can't open {}", out_file))?;
    let solution = read_solution(BufReader::new(file), problem.n_cars)
        .with_context(|| format!("can't read solution {}", out_file))?;
    evaluate(&problem, &solution).with_context(|| format!("invalid solution {}", out_file))
}
