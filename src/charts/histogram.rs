use crate::domain::apartment::format_number;
use maud::{html, Markup};

pub const DEFAULT_BINS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins spanning `[min, max]`; the last bin is closed on both ends.
/// Non-finite values are skipped. A column holding a single distinct value
/// produces one bin.
pub fn bin_values(values: &[f64], bins: usize) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![Bin {
            lower: min,
            upper: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Vertical bar chart of `bins` in a single color.
pub fn render(bins: &[Bin], color: &str, width: f64, height: f64) -> Markup {
    if bins.is_empty() {
        return html! { p class="empty" { "No data" } };
    }

    let axis = 18.0;
    let plot_height = height - axis;
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let bar_width = width / bins.len() as f64;

    html! {
        svg
            class="chart histogram"
            xmlns="http://www.w3.org/2000/svg"
            viewBox=(format!("0 0 {width} {height}"))
            font-size="10"
        {
            @for (i, bin) in bins.iter().enumerate() {
                @let bar_height = plot_height * bin.count as f64 / peak;
                rect
                    x=(format!("{:.2}", i as f64 * bar_width))
                    y=(format!("{:.2}", plot_height - bar_height))
                    width=(format!("{:.2}", (bar_width - 1.0).max(1.0)))
                    height=(format!("{:.2}", bar_height))
                    fill=(color)
                    stroke="#888"
                    stroke-width="0.5"
                {
                    title {
                        (format_number(bin.lower)) " – " (format_number(bin.upper))
                        ": " (bin.count)
                    }
                }
            }
            line x1="0" y1=(plot_height) x2=(width) y2=(plot_height) stroke="#444" stroke-width="1" {}
            text x="0" y=(height - 4.0) { (format_number(bins[0].lower)) }
            text x=(width) y=(height - 4.0) text-anchor="end" {
                (format_number(bins[bins.len() - 1].upper))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_bin_includes_max() {
        let bins = bin_values(&[0.0, 5.0, 10.0], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[5].count, 1);
        assert_eq!(bins[9].count, 1);
        assert_eq!(bins[9].upper, 10.0);
    }

    #[test]
    fn constant_column_is_one_bin() {
        let bins = bin_values(&[2.0, 2.0, 2.0], 10);
        assert_eq!(
            bins,
            vec![Bin {
                lower: 2.0,
                upper: 2.0,
                count: 3
            }]
        );
    }

    #[test]
    fn skips_non_finite_and_handles_empty() {
        assert!(bin_values(&[], 10).is_empty());
        assert!(bin_values(&[f64::NAN], 10).is_empty());
        let total: usize = bin_values(&[1.0, f64::NAN, 3.0], 4).iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }
}
