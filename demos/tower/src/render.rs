//! ASCII floor chart.

use std::fmt::Write;

use lift_sim::{CarStatus, Direction, Elevator, StepResult};

/// One glyph per car: `^`/`v` moving, `=` doors open, `.` idle.
fn glyph(car: &Elevator) -> char {
    match (car.status(), car.direction()) {
        (CarStatus::Moving, Direction::Up)   => '^',
        (CarStatus::Moving, _)               => 'v',
        (CarStatus::Loading, _)              => '=',
        (CarStatus::Idle, _)                 => '.',
    }
}

/// Render the building top floor first: one column per car, then the
/// number of passengers waiting on that floor.
pub fn chart(step: &StepResult<'_>) -> String {
    let mut out = String::new();
    let floors: Vec<_> = step.waiting.iter().map(|(floor, _)| floor).collect();

    for &floor in floors.iter().rev() {
        let _ = write!(out, "{:>4} |", floor.to_string());
        for car in step.elevators {
            if car.floor() == floor {
                let _ = write!(out, " [{}{}]", glyph(car), car.passengers().len());
            } else {
                out.push_str("  .. ");
            }
        }
        let waiting = step.waiting.at(floor).len();
        if waiting > 0 {
            let _ = write!(out, " | {waiting} waiting");
        }
        out.push('\n');
    }

    let s = &step.stats;
    let _ = writeln!(
        out,
        "{} | generated {}/{}  waiting {}  riding {}  done {}",
        step.time, s.generated, s.total, s.waiting, s.in_elevator, s.done
    );
    out
}
