extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

#[test]
fn renders_to_the_default_file() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-n", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generating Mandelbrot Set with 40 pixels...",
        ))
        .stdout(predicate::str::contains(
            "Mandelbrot set successfully generated!",
        ));

    let img = image::open(dir.path().join("mandelbrot.png")).unwrap().to_rgb();
    assert_eq!(img.dimensions(), (40, 40));
}

#[test]
fn honours_output_iterations_and_threads() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("small.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["-n", "33", "-i", "50", "-t", "1", "-o"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn rejects_a_one_pixel_grid() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-n", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid resolution 1"));
    assert!(!dir.path().join("mandelbrot.png").exists());
}

#[test]
fn rejects_a_grid_too_large_for_an_image() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-n", "4294967296"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Generating").not());
    assert!(!dir.path().join("mandelbrot.png").exists());
}

#[test]
fn rejects_a_pixel_count_that_is_not_a_number() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .current_dir(dir.path())
        .args(&["-n", "many"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Could not parse pixel count"));
}

#[test]
fn reports_an_unwritable_output() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("missing").join("mandelbrot.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["-n", "8", "-o"])
        .arg(&out)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("could not write"));
}

#[test]
fn prompts_for_the_pixel_count() {
    let dir = tempdir().unwrap();
    let mut child = Command::cargo_bin("mandelbrot")
        .unwrap()
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"12\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Number of pixels: "));
    assert!(stdout.contains("Generating Mandelbrot Set with 12 pixels..."));
    assert!(dir.path().join("mandelbrot.png").exists());
}
