//! Text line charts for the terminal.
//!
//! Each point gets its own column (`●`), consecutive points are joined with
//! interpolated `·` marks. The y axis shows the max, mid and min values.

const STEP: usize = 4;

fn level(value: f64, min: f64, max: f64, height: usize) -> usize {
    if height <= 1 || (max - min).abs() < f64::EPSILON {
        return height / 2;
    }
    (((value - min) / (max - min)) * (height - 1) as f64).round() as usize
}

/// Render `values` as a line chart `height` rows tall.
/// `first` and `last` label the two ends of the x axis.
pub fn render_line_chart(values: &[f64], height: usize, first: &str, last: &str) -> String {
    if values.is_empty() {
        return String::new();
    }

    let height = height.max(2);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (values.len() - 1) * STEP + 1;

    let mut grid = vec![vec![' '; width]; height];

    for (i, pair) in values.windows(2).enumerate() {
        let a = level(pair[0], min, max, height) as f64;
        let b = level(pair[1], min, max, height) as f64;
        for k in 1..STEP {
            let y = (a + (b - a) * k as f64 / STEP as f64).round() as usize;
            grid[y][i * STEP + k] = '·';
        }
    }

    for (i, v) in values.iter().enumerate() {
        grid[level(*v, min, max, height)][i * STEP] = '●';
    }

    let labels = [
        format!("{:.1}", max),
        format!("{:.1}", (max + min) / 2.0),
        format!("{:.1}", min),
    ];
    let label_w = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            labels[0].as_str()
        } else if row == 0 {
            labels[2].as_str()
        } else if row == (height - 1) / 2 && height > 2 {
            labels[1].as_str()
        } else {
            ""
        };
        let line: String = grid[row].iter().collect();
        out.push_str(&format!("{:>label_w$} ┤ {}\n", label, line.trim_end()));
    }

    out.push_str(&format!(
        "{:>label_w$} └─{}\n",
        "",
        "─".repeat(width + 1)
    ));

    let axis = if values.len() > 1 && first != last {
        let gap = (width + 3).saturating_sub(first.len() + last.len()).max(1);
        format!("{first}{}{last}", " ".repeat(gap))
    } else {
        first.to_string()
    };
    out.push_str(&format!("{:>label_w$}   {}\n", "", axis));

    out
}
