// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::config::{CLI_MAX_STEPS, DEFAULT_OUTPUT, MAX_RESOLUTION};
use mandelbrot::{write_image, Config, GridGenerator, MandelbrotError};
use std::io::{self, BufRead, Write};
use std::process;
use std::str::FromStr;

const PIXELS: &str = "pixels";
const ITERATIONS: &str = "iterations";
const OUTPUT: &str = "output";
const THREADS: &str = "threads";

/// Exit code for a pixel count that can't be read at all.
const EXIT_BAD_INPUT: i32 = 2;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn app<'a, 'b>(default_iterations: &'a str) -> App<'a, 'b> {
    let max_threads = num_cpus::get();
    App::new("mandelbrot")
        .version("0.1.0")
        .about("Renders the Mandelbrot set as a plasma-coloured escape-count image")
        .arg(
            Arg::with_name(PIXELS)
                .required(false)
                .long(PIXELS)
                .short("n")
                .takes_value(true)
                .help("Pixels per side of the square image; asked for if omitted"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(default_iterations)
                .validator(|s| {
                    validate_range(
                        &s,
                        1usize,
                        100_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 100000",
                    )
                })
                .help("Iterations before a point is considered inside the set"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
}

fn args<'a>(default_iterations: &'a str) -> ArgMatches<'a> {
    app(default_iterations).get_matches()
}

/// Ask for the pixel count on `output` and read one line from `input`.
fn prompt_pixels<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, String> {
    write!(output, "Number of pixels: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

/// Reads a pixel count no image could exceed.  Whether the count is
/// large enough to map is left to the library.
fn parse_pixels(s: &str) -> Result<usize, String> {
    let s = s.trim();
    validate_range(
        s,
        0,
        MAX_RESOLUTION,
        &format!("Could not parse pixel count '{}'", s),
        &format!("Pixel count {} is larger than {}", s, MAX_RESOLUTION),
    )?;
    usize::from_str(s).map_err(|e| e.to_string())
}

fn fail(e: &MandelbrotError) -> ! {
    eprintln!("Render failure: {}", e);
    process::exit(e.exit_code());
}

fn main() {
    env_logger::init();
    let default_iterations = CLI_MAX_STEPS.to_string();
    let matches = args(&default_iterations);

    let raw_pixels = match matches.value_of(PIXELS) {
        Some(s) => s.to_string(),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let answer = prompt_pixels(&mut stdin.lock(), &mut stdout.lock());
            match answer {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Could not read pixel count: {}", e);
                    process::exit(EXIT_BAD_INPUT);
                }
            }
        }
    };
    let pixels = match parse_pixels(&raw_pixels) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(EXIT_BAD_INPUT);
        }
    };

    let iterations = value_t!(matches, ITERATIONS, usize).unwrap_or_else(|e| e.exit());
    let threads = value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit());
    let outfile = matches.value_of(OUTPUT).unwrap_or(DEFAULT_OUTPUT);

    let config = Config::new(pixels).with_max_steps(iterations);
    let generator = match GridGenerator::new(&config) {
        Ok(generator) => generator,
        Err(e) => fail(&e),
    };

    println!("Generating Mandelbrot Set with {} pixels...", pixels);
    info!(
        "{} iterations per pixel on {} thread(s), writing {}",
        iterations, threads, outfile
    );
    let grid = if threads > 1 {
        generator.generate_threaded(threads)
    } else {
        Ok(generator.generate())
    };
    let grid = match grid {
        Ok(grid) => grid,
        Err(e) => fail(&e),
    };

    if let Err(e) = write_image(outfile, &grid) {
        fail(&e);
    }
    println!("Mandelbrot set successfully generated!");
}
