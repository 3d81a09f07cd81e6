use super::PathCommand;

/// Uniform cubic B-spline through `points`, emitted as path commands.
///
/// The curve starts at the first point and ends at the last point; interior
/// points act as control points. Fewer than three points degrade to straight
/// segments.
#[must_use]
pub fn basis_curve(points: &[(f64, f64)]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 2);
    let Some(&(first_x, first_y)) = points.first() else {
        return commands;
    };
    commands.push(PathCommand::MoveTo(first_x, first_y));

    match points.len() {
        1 => return commands,
        2 => {
            let (x, y) = points[1];
            commands.push(PathCommand::LineTo(x, y));
            return commands;
        }
        _ => {}
    }

    let (x0, y0) = points[0];
    let (x1, y1) = points[1];
    commands.push(PathCommand::LineTo(
        (5.0 * x0 + x1) / 6.0,
        (5.0 * y0 + y1) / 6.0,
    ));

    for window in points.windows(3) {
        commands.push(basis_segment(window[0], window[1], window[2]));
    }

    let last = points.len() - 1;
    let (x_prev, x_last) = (points[last - 1], points[last]);
    commands.push(basis_segment(x_prev, x_last, x_last));
    commands.push(PathCommand::LineTo(x_last.0, x_last.1));
    commands
}

fn basis_segment(p0: (f64, f64), p1: (f64, f64), p: (f64, f64)) -> PathCommand {
    PathCommand::CubicTo {
        c1: ((2.0 * p0.0 + p1.0) / 3.0, (2.0 * p0.1 + p1.1) / 3.0),
        c2: ((p0.0 + 2.0 * p1.0) / 3.0, (p0.1 + 2.0 * p1.1) / 3.0),
        end: ((p0.0 + 4.0 * p1.0 + p.0) / 6.0, (p0.1 + 4.0 * p1.1 + p.1) / 6.0),
    }
}

/// Closed area between a basis curve through `points` and a straight baseline.
///
/// `horizontal_baseline` closes against `y = baseline` (top marginal);
/// otherwise against `x = baseline` (right marginal).
#[must_use]
pub fn basis_area(points: &[(f64, f64)], baseline: f64, horizontal_baseline: bool) -> Vec<PathCommand> {
    let mut commands = basis_curve(points);
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return commands;
    };

    let project = |(x, y): (f64, f64)| {
        if horizontal_baseline {
            (x, baseline)
        } else {
            (baseline, y)
        }
    };
    let (end_x, end_y) = project(last);
    let (start_x, start_y) = project(first);
    commands.push(PathCommand::LineTo(end_x, end_y));
    commands.push(PathCommand::LineTo(start_x, start_y));
    commands.push(PathCommand::Close);
    commands
}
