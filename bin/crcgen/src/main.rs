mod cli;

use std::path::Path;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Output};
use crcgen_emit::backend::OutputSink;
use crcgen_emit::fs_backend::{FileSink, StdoutSink};
use crcgen_emit::Emitter;
use crcgen_table::Table;
use log::info;

const CHECK_INPUT: &[u8] = b"123456789";

/// `prog arg1 arg2 ...` as quoted in the generated header. Arguments need not
/// be UTF-8 (output paths), so they are converted lossily.
fn invocation() -> String {
    let mut args = std::env::args_os();
    let prog = args.next()
        .and_then(|a| Path::new(&a).file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "crcgen".to_string());
    let rest = args.map(|a| a.to_string_lossy().into_owned());
    std::iter::once(prog).chain(rest).collect::<Vec<_>>().join(" ")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let job = match cli.into_job(&invocation()) {
        Ok(job) => job,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };
    info!("{} polynomial {} -> {:?} ({:?})", job.poly.width(), job.poly, job.output, job.config.lang);

    let table = Table::generate(job.poly);
    info!(
        "check(\"123456789\") = 0x{:0digits$X}",
        table.digest(CHECK_INPUT),
        digits = job.poly.width().hex_digits()
    );

    let sink: Box<dyn OutputSink> = match job.output {
        Output::Stdout => Box::new(StdoutSink),
        Output::File(path) => Box::new(FileSink::new(path)),
    };
    let destination = sink.describe();

    let mut emitter = Emitter::new(sink, job.config);
    emitter.emit(&table).with_context(|| format!("cannot write {}", destination))?;
    Ok(())
}
