//! ASCII plotting of strain amplitude for terminal output.
//!
//! Fixed-size character grid, log10 on both axes, optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - `h0`: `-` line, `hp`: `+` line, `hc`: `x` line
//! - optional merger frequency: `|` column (drawn only on empty cells)

use nalgebra::Complex;

use crate::domain::{ChannelKind, Strain, WaveformFile};

fn channel_char(kind: ChannelKind) -> char {
    match kind {
        ChannelKind::Strain => '-',
        ChannelKind::Plus => '+',
        ChannelKind::Cross => 'x',
    }
}

/// Render `log10|h|` against `log10 f` for every channel.
pub fn render_strain_plot(
    freqs: &[f64],
    channels: &[(ChannelKind, Strain)],
    merger_hz: Option<f64>,
    width: usize,
    height: usize,
) -> String {
    let series: Vec<(ChannelKind, Vec<(f64, f64)>)> = channels
        .iter()
        .map(|(kind, strain)| (*kind, log_amplitude_points(freqs, strain)))
        .collect();
    render_plot(&series, merger_hz, width, height)
}

/// Render a plot from a saved waveform JSON file.
pub fn render_waveform_file_plot(waveform: &WaveformFile, width: usize, height: usize) -> String {
    let channels: Vec<(ChannelKind, Strain)> = waveform
        .channels
        .iter()
        .map(|c| (c.kind, c.to_strain()))
        .collect();
    let merger = waveform.merger_frequency_hz;
    render_strain_plot(
        &waveform.frequency_hz,
        &channels,
        merger.is_finite().then_some(merger),
        width,
        height,
    )
}

/// `(log10 f, log10 |h|)` pairs; zero, negative and non-finite samples are dropped.
fn log_amplitude_points(freqs: &[f64], strain: &[Complex<f64>]) -> Vec<(f64, f64)> {
    freqs
        .iter()
        .zip(strain.iter())
        .filter_map(|(&f, h)| {
            let a = h.norm();
            (f > 0.0 && a > 0.0 && a.is_finite()).then(|| (f.log10(), a.log10()))
        })
        .collect()
}

fn render_plot(series: &[(ChannelKind, Vec<(f64, f64)>)], merger_hz: Option<f64>, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all = || series.iter().flat_map(|(_, pts)| pts.iter());
    let (x_min, x_max) = range(all().map(|&(x, _)| x)).unwrap_or((1.0, 3.0));
    let (y_min, y_max) = range(all().map(|&(_, y)| y)).unwrap_or((-1.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for (kind, pts) in series {
        draw_curve(&mut grid, pts, channel_char(*kind), x_min, x_max, y_min, y_max);
    }

    let merger_col = merger_hz
        .filter(|&f| f > 0.0)
        .map(f64::log10)
        .filter(|&x| x >= x_min && x <= x_max)
        .map(|x| map_x(x, x_min, x_max, width));
    if let Some(col) = merger_col {
        for row in grid.iter_mut() {
            if row[col] == ' ' {
                row[col] = '|';
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: f=[{:.2}, {:.2}] Hz | log10|h|=[{y_min:.2}, {y_max:.2}]\n",
        10f64.powf(x_min),
        10f64.powf(x_max)
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    let mut legend: Vec<String> = series
        .iter()
        .map(|(kind, _)| format!("{} {}", channel_char(*kind), kind.label()))
        .collect();
    if let (Some(_), Some(f)) = (merger_col, merger_hz) {
        legend.push(format!("| f_merger={f:.1} Hz"));
    }
    out.push_str(&format!("Legend: {}\n", legend.join("  ")));

    out
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else if min.is_finite() && max.is_finite() {
        Some((min - 0.5, max + 0.5))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], pts: &[(f64, f64)], ch: char, x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in pts {
        let col = map_x(x, x_min, x_max, width);
        let row = map_y(y, y_min, y_max, height);
        match prev {
            Some((c0, r0)) => draw_line(grid, c0, r0, col, row, ch),
            None if grid[row][col] == ' ' => grid[row][col] = ch,
            None => {}
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish). Only blank cells are written, so
/// earlier channels stay visible where curves overlap.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let freqs = [10.0, 100.0];
        let channels = vec![(
            ChannelKind::Strain,
            vec![Complex::new(1e-20, 0.0), Complex::new(0.0, 1e-22)],
        )];

        let txt = render_strain_plot(&freqs, &channels, None, 10, 5);
        let expected = concat!(
            "Plot: f=[10.00, 100.00] Hz | log10|h|=[-22.10, -19.90]\n",
            "--        \n",
            "  --      \n",
            "    --    \n",
            "      --  \n",
            "        --\n",
            "Legend: - h0\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn merger_marker_fills_empty_column() {
        let freqs = [10.0, 100.0];
        let channels = vec![(ChannelKind::Plus, vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)])];

        let txt = render_strain_plot(&freqs, &channels, Some(31.6), 11, 5);
        let rows: Vec<&str> = txt.lines().skip(1).take(5).collect();
        assert!(rows.iter().all(|r| r.chars().nth(5).is_some_and(|c| c == '|' || c == '+')));
        assert!(txt.contains("| f_merger=31.6 Hz"));
    }

    #[test]
    fn zero_strain_renders_blank_grid() {
        let freqs = [10.0, 20.0, 30.0];
        let channels = vec![(ChannelKind::Strain, vec![Complex::new(0.0, 0.0); 3])];
        let txt = render_strain_plot(&freqs, &channels, None, 10, 5);
        assert!(txt.lines().skip(1).take(5).all(|r| r.trim().is_empty()));
    }
}
