//! Interactive text menu for the polyxform library
//!
//! Reads a figure and an origin from stdin, then applies rotations,
//! reflections and scalings until the user quits. Set
//! `RUST_LOG=polyxform=debug` to see every step the engine takes.

use std::error::Error;
use std::io::{self, BufRead, Write};

use polyxform::{
    drive, Choice, Point, Polygon, Presenter, ReflectionMode, Transform, TransformError,
};

struct TextMenu<R> {
    input: R,
}

impl<R: BufRead> TextMenu<R> {
    fn ask(&mut self, prompt: &str) -> Result<String, Box<dyn Error>> {
        print!("\t{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err("input closed".into());
        }
        Ok(line.trim().to_string())
    }

    fn ask_number<T: std::str::FromStr>(&mut self, prompt: &str) -> Result<T, Box<dyn Error>> {
        loop {
            match self.ask(prompt)?.parse() {
                Ok(v) => return Ok(v),
                Err(_) => println!("\t !!! Enter a numeric value."),
            }
        }
    }

    fn ask_point(&mut self, label: &str) -> Result<Point, Box<dyn Error>> {
        let x = self.ask_number(&format!("x{}: ", label))?;
        let y = self.ask_number(&format!("y{}: ", label))?;
        Ok(Point::new(x, y))
    }
}

impl<R: BufRead> Presenter for TextMenu<R> {
    type Error = Box<dyn Error>;

    fn collect_polygon(&mut self) -> Result<Vec<Point>, Self::Error> {
        let n: usize = loop {
            let n = self.ask_number("How many points does the figure have? ")?;
            if n >= Polygon::MIN_POINTS {
                break n;
            }
            println!("\t !! At least {} points are needed.", Polygon::MIN_POINTS);
        };
        (1..=n).map(|i| self.ask_point(&i.to_string())).collect()
    }

    fn collect_origin(&mut self) -> Result<Point, Self::Error> {
        let answer = self.ask("Transform about the origin (0, 0)? (y/n): ")?;
        if answer.eq_ignore_ascii_case("n") {
            self.ask_point("0")
        } else {
            Ok(Point::ORIGIN)
        }
    }

    fn select_transform(&mut self, current: &Polygon) -> Result<Choice, Self::Error> {
        println!("\n\t{}", "=".repeat(60));
        println!("\tcurrent: {}", current);
        println!("\t1. Rotate | 2. Reflect | 3. Scale | 4. Reset | 5. Quit");
        println!("\t{}", "=".repeat(60));
        loop {
            let choice = match self.ask_number::<u32>("Option: ")? {
                1 => Transform::Rotation {
                    angle_degrees: self.ask_number("Rotation angle (degrees): ")?,
                },
                2 => {
                    let mode = self.ask("Mirror line (x, y, d for y=x, -d for y=-x, m for y=mx): ")?;
                    let mode = match mode.parse::<ReflectionMode>() {
                        Ok(mode) => mode,
                        Err(e) => {
                            self.report(&e)?;
                            continue;
                        }
                    };
                    let slope = if mode.needs_slope() {
                        Some(self.ask_number("Slope m: ")?)
                    } else {
                        None
                    };
                    Transform::Reflection { mode, slope }
                }
                3 => Transform::Scale {
                    kx: self.ask_number("Factor in X: ")?,
                    ky: self.ask_number("Factor in Y: ")?,
                },
                4 => return Ok(Choice::Reset),
                5 => return Ok(Choice::Quit),
                _ => {
                    println!("\t !! Enter a number from 1 to 5.");
                    continue;
                }
            };
            return Ok(Choice::Apply(choice));
        }
    }

    fn render(&mut self, before: &Polygon, after: &Polygon) -> Result<(), Self::Error> {
        // both columns follow the closure of the shape before the step
        let close = !before.is_closed();
        let outline = |p: &Polygon| {
            let mut points = p.points().to_vec();
            if close {
                points.push(p.points()[0]);
            }
            points
        };
        println!("\n\t{:>24} | {:<24}", "before", "after");
        for (b, a) in outline(before).iter().zip(outline(after).iter()) {
            println!("\t{:>24} | {:<24}", b.to_string(), a.to_string());
        }
        Ok(())
    }

    fn report(&mut self, error: &TransformError) -> Result<(), Self::Error> {
        println!("\t !! {}", error);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("\n\t=== Polygon Transformations ===");
    let stdin = io::stdin();
    let mut menu = TextMenu { input: stdin.lock() };
    let session = drive(&mut menu)?;
    println!(
        "\n\tDone after {} transforms. Final figure: {}",
        session.applied_count(),
        session.current()
    );
    Ok(())
}
