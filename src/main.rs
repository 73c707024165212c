use std::{
    fs::{self, File},
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;

use strutil::{int_to_base62, word_count, Pipeline};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Pipeline file path (currently only ron supported)
    #[arg(short, long, group = "action")]
    pipeline: Option<PathBuf>,

    /// Directly provided pipeline (ron format)
    #[arg(long, group = "action")]
    pipeline_string: Option<String>,

    /// Print number of words in each line instead of transforming it
    #[arg(short, long, group = "action")]
    word_count: bool,

    /// Print base62 encoding of a number and exit
    #[arg(long, group = "action", allow_negative_numbers = true)]
    base62: Option<i64>,

    /// File to read lines from. Reads from stdin if unset
    #[arg(short, long)]
    file: Option<PathBuf>,
}

enum Action {
    Transform(Pipeline),
    CountWords,
}

fn handle_line(action: &Action, line: io::Result<String>) -> Result<(), String> {
    let line = line.map_err(|err| format!("reading line: {err}"))?;

    match action {
        Action::Transform(pipeline) => println!("{}", pipeline.apply(&line)),
        Action::CountWords => println!("{}", word_count(&line)),
    }

    Ok(())
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    if let Some(n) = args.base62 {
        println!("{}", int_to_base62(n).map_err(|err| err.to_string())?);
        return Ok(());
    }

    let action = if args.word_count {
        Action::CountWords
    } else {
        let pipeline_string = if let Some(pipeline) = args.pipeline {
            fs::read_to_string(pipeline).map_err(|err| format!("reading pipeline file: {err}"))?
        } else {
            args.pipeline_string.ok_or(
                "expected one of --pipeline, --pipeline-string, --word-count or --base62",
            )?
        };

        Action::Transform(
            ron::from_str::<Pipeline>(&pipeline_string)
                .map_err(|err| format!("parsing pipeline: {err}"))?,
        )
    };

    if let Some(filename) = args.file {
        let file = File::open(filename).map_err(|err| format!("reading input file: {err}"))?;
        for line in io::BufReader::new(file).lines() {
            handle_line(&action, line)?;
        }
    } else {
        for line in io::stdin().lines() {
            handle_line(&action, line)?;
        }
    }

    Ok(())
}
