use std::time::{Duration, Instant};

use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model::{BarChartConfig, BarPoint, BarSeries, Orientation};
use crate::locale;
use crate::theme::{CHART_PRIMARY, CHART_SECONDARY, CHART_TEXT, GRID_LINE};

const ANIMATION: Duration = Duration::from_millis(1000);
const LABEL_GUTTER: f32 = 180.0;
const MAX_LABEL_CHARS: usize = 26;

pub struct BarChart {
    cache: Cache,
    series: BarSeries,
    colors: Vec<Color>,
    config: BarChartConfig,
    animated_at: Instant,
}

impl BarChart {
    pub fn new(series: BarSeries, colors: Vec<Color>) -> Self {
        Self {
            cache: Cache::new(),
            series,
            colors,
            config: BarChartConfig::default(),
            animated_at: Instant::now(),
        }
    }

    pub fn set_data(&mut self, series: BarSeries, colors: Vec<Color>) {
        self.series = series;
        self.colors = colors;
        self.animated_at = Instant::now();
        self.cache.clear();
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn is_animating(&self) -> bool {
        self.animated_at.elapsed() < ANIMATION
    }

    pub fn invalidate(&self) {
        self.cache.clear();
    }

    fn progress(&self) -> f32 {
        ease_out_quart(self.animated_at.elapsed().as_secs_f32() / ANIMATION.as_secs_f32())
    }

    fn bar_color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(CHART_SECONDARY)
    }

    fn plot_area(&self, size: Size) -> Option<(f32, f32, f32, f32)> {
        let padding = self.config.padding;
        let left = match self.series.orientation {
            Orientation::Vertical => padding,
            Orientation::Horizontal => LABEL_GUTTER,
        };

        if size.width <= left + padding || size.height <= padding * 2.0 {
            return None;
        }

        Some((left, padding, size.width - padding, size.height - padding))
    }

    fn point_at(&self, bounds: Rectangle, position: Point) -> Option<&BarPoint> {
        let (left, top, right, bottom) = self.plot_area(bounds.size())?;
        if position.x < left || position.x > right || position.y < top || position.y > bottom {
            return None;
        }

        let count = self.series.points.len();
        if count == 0 {
            return None;
        }

        let index = match self.series.orientation {
            Orientation::Vertical => {
                let slot = (right - left) / count as f32;
                ((position.x - left) / slot).floor() as usize
            }
            Orientation::Horizontal => {
                let slot = (bottom - top) / count as f32;
                ((position.y - top) / slot).floor() as usize
            }
        };

        self.series.points.get(index)
    }
}

impl canvas::Program<crate::message::Message> for BarChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        let progress = self.progress();

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let Some((left, top, right, bottom)) = self.plot_area(frame.size()) else {
                return;
            };

            let x_axis = Path::line(Point::new(left, bottom), Point::new(right, bottom));
            let y_axis = Path::line(Point::new(left, bottom), Point::new(left, top));

            frame.stroke(
                &x_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );
            frame.stroke(
                &y_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );

            let (lo, hi, step) = value_axis(&self.series.points, self.config.grid_lines);
            let range = (hi - lo) as f32;

            // Grid lines and tick labels follow the value axis only; the
            // category axis stays clean.
            let mut tick = lo;
            while tick <= hi {
                let t = (tick - lo) as f32 / range;
                match self.series.orientation {
                    Orientation::Vertical => {
                        let y = bottom - t * (bottom - top);
                        let line = Path::line(Point::new(left, y), Point::new(right, y));
                        frame.stroke(
                            &line,
                            Stroke::default().with_width(1.0).with_color(GRID_LINE),
                        );
                        frame.fill_text(Text {
                            content: locale::thousands(tick),
                            position: Point::new(left - 8.0, y - 6.0),
                            color: CHART_TEXT,
                            size: 11.0.into(),
                            align_x: iced::alignment::Horizontal::Right.into(),
                            ..Text::default()
                        });
                    }
                    Orientation::Horizontal => {
                        let x = left + t * (right - left);
                        let line = Path::line(Point::new(x, top), Point::new(x, bottom));
                        frame.stroke(
                            &line,
                            Stroke::default().with_width(1.0).with_color(GRID_LINE),
                        );
                        frame.fill_text(Text {
                            content: locale::thousands(tick),
                            position: Point::new(x, bottom + 8.0),
                            color: CHART_TEXT,
                            size: 11.0.into(),
                            align_x: iced::alignment::Horizontal::Center.into(),
                            ..Text::default()
                        });
                    }
                }
                tick += step;
            }

            let count = self.series.points.len();
            if count == 0 {
                return;
            }

            match self.series.orientation {
                Orientation::Vertical => {
                    let slot = (right - left) / count as f32;
                    let baseline = bottom - ((0 - lo) as f32 / range) * (bottom - top);

                    for (index, point) in self.series.points.iter().enumerate() {
                        let x = left + index as f32 * slot;
                        let extent =
                            (point.value as f32 / range) * (bottom - top) * progress;
                        let (y, height) = if extent >= 0.0 {
                            (baseline - extent, extent)
                        } else {
                            (baseline, -extent)
                        };

                        let rect =
                            Path::rectangle(Point::new(x + slot * 0.1, y), Size::new(slot * 0.8, height));
                        frame.fill(&rect, self.bar_color(index));

                        frame.fill_text(Text {
                            content: point.label.clone(),
                            position: Point::new(x + slot * 0.5, bottom + 6.0),
                            color: CHART_TEXT,
                            size: 11.0.into(),
                            align_x: iced::alignment::Horizontal::Center.into(),
                            ..Text::default()
                        });
                    }
                }
                Orientation::Horizontal => {
                    let slot = (bottom - top) / count as f32;
                    let baseline = left + ((0 - lo) as f32 / range) * (right - left);

                    for (index, point) in self.series.points.iter().enumerate() {
                        let y = top + index as f32 * slot;
                        let extent = (point.value as f32 / range) * (right - left) * progress;
                        let (x, width) = if extent >= 0.0 {
                            (baseline, extent)
                        } else {
                            (baseline + extent, -extent)
                        };

                        let rect =
                            Path::rectangle(Point::new(x, y + slot * 0.1), Size::new(width, slot * 0.8));
                        frame.fill(&rect, self.bar_color(index));

                        frame.fill_text(Text {
                            content: truncate_label(&point.label, MAX_LABEL_CHARS),
                            position: Point::new(left - 8.0, y + slot * 0.5 - 6.0),
                            color: CHART_TEXT,
                            size: 11.0.into(),
                            align_x: iced::alignment::Horizontal::Right.into(),
                            ..Text::default()
                        });
                    }
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if let Some(point) = self.point_at(bounds, cursor_pos) {
                let mut overlay = Frame::new(renderer, bounds.size());
                let (left, top, right, _bottom) = self
                    .plot_area(bounds.size())
                    .unwrap_or((0.0, 0.0, bounds.width, bounds.height));

                let title = point.label.clone();
                let body = format!("{}: {}", self.series.name, locale::thousands(point.value));

                let tooltip_padding = 6.0;
                let widest = title.chars().count().max(body.chars().count()) as f32;
                let tooltip_width = widest * 7.0 + tooltip_padding * 2.0;
                let tooltip_height = 36.0;
                let mut tooltip_x = cursor_pos.x + 10.0;
                let mut tooltip_y = cursor_pos.y - tooltip_height - 10.0;

                if tooltip_x + tooltip_width > right {
                    tooltip_x = cursor_pos.x - tooltip_width - 10.0;
                }
                if tooltip_x < left {
                    tooltip_x = left;
                }
                if tooltip_y < top {
                    tooltip_y = cursor_pos.y + 10.0;
                }

                let rect = Path::rectangle(
                    Point::new(tooltip_x, tooltip_y),
                    Size::new(tooltip_width, tooltip_height),
                );
                overlay.fill(&rect, CHART_PRIMARY);
                overlay.fill_text(Text {
                    content: title,
                    position: Point::new(tooltip_x + tooltip_padding, tooltip_y + 4.0),
                    color: Color::WHITE,
                    size: 12.0.into(),
                    ..Text::default()
                });
                overlay.fill_text(Text {
                    content: body,
                    position: Point::new(tooltip_x + tooltip_padding, tooltip_y + 19.0),
                    color: Color::WHITE,
                    size: 12.0.into(),
                    ..Text::default()
                });

                geometries.push(overlay.into_geometry());
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn ease_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

// Integer ticks only; the axis end is pushed to the next step multiple so the
// last grid line never lands on a fractional value.
fn value_axis(points: &[BarPoint], grid_lines: usize) -> (i64, i64, i64) {
    let lo = points.iter().map(|p| p.value).min().unwrap_or(0).min(0);
    let hi = points.iter().map(|p| p.value).max().unwrap_or(0).max(0);
    let span = (hi - lo).max(1);
    let divisions = grid_lines.max(1) as i64;
    let step = (span + divisions - 1) / divisions;
    let hi = lo + step * ((span + step - 1) / step);
    (lo, hi, step)
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }

    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
