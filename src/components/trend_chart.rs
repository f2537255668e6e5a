use yew::prelude::*;

use crate::models::StatCard;

const WIDTH: f64 = 260.0;
const HEIGHT: f64 = 120.0;
const PAD: f64 = 20.0;
const SERIES_COLORS: [&str; 3] = ["#2e7d32", "#c62828", "#1565c0"];

/// Largest yesterday/today value across the series
fn peak(cards: &[StatCard]) -> u64 {
    cards.iter().map(|c| c.yesterday.max(c.today)).max().unwrap_or(0)
}

fn scale_y(value: u64, peak: u64) -> f64 {
    let baseline = HEIGHT - PAD;
    if peak == 0 {
        return baseline;
    }
    baseline - (value as f64 / peak as f64) * (HEIGHT - 2.0 * PAD)
}

/// Yesterday on the left edge, today on the right
fn series_points(card: &StatCard, peak: u64) -> [(f64, f64); 2] {
    [
        (PAD, scale_y(card.yesterday, peak)),
        (WIDTH - PAD, scale_y(card.today, peak)),
    ]
}

fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub cards: [StatCard; 3],
}

/// Yesterday → today lines for the three dashboard series
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let peak = peak(&props.cards);
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);

    html! {
        <div class="trend-chart">
            <svg viewBox={view_box} role="img" aria-label="Yesterday and today">
                <line
                    x1={PAD.to_string()} y1={(HEIGHT - PAD).to_string()}
                    x2={(WIDTH - PAD).to_string()} y2={(HEIGHT - PAD).to_string()}
                    stroke="#bdbdbd"
                />
                { for props.cards.iter().zip(SERIES_COLORS).map(|(card, color)| {
                    let points = series_points(card, peak);
                    html! {
                        <g>
                            <polyline points={polyline_attr(&points)} fill="none" stroke={color} stroke-width="2" />
                            { for points.iter().map(|(x, y)| html! {
                                <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="3" fill={color} />
                            }) }
                        </g>
                    }
                }) }
                <text x={PAD.to_string()} y={(HEIGHT - 4.0).to_string()} font-size="10">{"Yesterday"}</text>
                <text x={(WIDTH - PAD).to_string()} y={(HEIGHT - 4.0).to_string()} font-size="10" text-anchor="end">{"Today"}</text>
            </svg>
            <ul class="trend-legend">
                { for props.cards.iter().zip(SERIES_COLORS).map(|(card, color)| html! {
                    <li style={format!("color: {}", color)}>{card.label}</li>
                }) }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(yesterday: u64, today: u64) -> StatCard {
        StatCard {
            label: "Emails Sent",
            total: yesterday + today,
            yesterday,
            today,
        }
    }

    #[test]
    fn test_peak_lands_on_top_and_zero_on_baseline() {
        let cards = [card(0, 10), card(5, 2), card(1, 1)];
        let peak = peak(&cards);
        assert_eq!(peak, 10);

        let [yesterday, today] = series_points(&cards[0], peak);
        assert_eq!(yesterday, (PAD, HEIGHT - PAD));
        assert_eq!(today, (WIDTH - PAD, PAD));

        let [half, _] = series_points(&cards[1], peak);
        assert_eq!(half.1, HEIGHT / 2.0);
    }

    #[test]
    fn test_all_zero_series_stay_flat() {
        let cards = [card(0, 0), card(0, 0), card(0, 0)];
        let peak = peak(&cards);
        assert_eq!(peak, 0);
        for c in &cards {
            let [a, b] = series_points(c, peak);
            assert_eq!(a.1, HEIGHT - PAD);
            assert_eq!(b.1, HEIGHT - PAD);
        }
    }

    #[test]
    fn test_polyline_attr_format() {
        assert_eq!(polyline_attr(&[(20.0, 100.0), (240.0, 20.5)]), "20.0,100.0 240.0,20.5");
    }
}
