use std::time::Instant;

use polyominoes::{
    emit::{self, Table},
    Enumerator, Polyomino,
};

use crate::{finish_bar, make_bar, AllOpts, EnumerateOpts, OutputFormat};

/// Expand levels until reaching `n`, with a progress bar for every level.
fn unique_expansions(enumerator: &mut Enumerator, n: usize) -> Vec<Polyomino> {
    let result = enumerator.enumerate_observed(
        n,
        |from, len| {
            let bar = make_bar(len as u64);
            bar.set_message(format!("Expanding base polyominoes of N = {from}..."));
            bar
        },
        |next_n, level, bar| {
            finish_bar(bar, bar.elapsed(), level.len(), next_n);
        },
    );

    match result {
        Ok(shapes) => shapes.to_vec(),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn write_table(table: &Table, format: OutputFormat) {
    let stdout = std::io::stdout();

    if let Err(e) = table.write(format.into(), stdout.lock()) {
        eprintln!("Failed to write table {}. Error: {e}", table.name);
        std::process::exit(1);
    }
}

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    let start = Instant::now();

    let mut enumerator = Enumerator::new().with_parallelism(!opts.run.no_parallelism);

    let shapes = unique_expansions(&mut enumerator, n);

    let name = opts.name.clone().unwrap_or_else(|| emit::table_name(n));
    let table = Table::new(&name, n, &shapes).with_forces(opts.force, opts.ang_force);
    write_table(&table, opts.output.format);

    let duration = start.elapsed();

    eprintln!("Unique polyominoes found for N = {n}: {}.", shapes.len());
    eprintln!("Duration: {} ms", duration.as_millis());
}

/// Emit a table for every size with a conventional name, reusing each
/// level for the next one.
pub fn enumerate_all(opts: &AllOpts) {
    let start = Instant::now();

    let mut enumerator = Enumerator::new().with_parallelism(!opts.run.no_parallelism);

    for n in emit::NAMED_SIZES {
        let shapes = unique_expansions(&mut enumerator, n);

        let name = emit::table_name(n);
        write_table(&Table::new(&name, n, &shapes), opts.output.format);

        eprintln!("Unique polyominoes found for N = {n}: {}.", shapes.len());
    }

    eprintln!("Duration: {} ms", start.elapsed().as_millis());
}
