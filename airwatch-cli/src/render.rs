//! Text rendering of a dashboard view

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};
use colored::*;

use airwatch_core::{
    classify::Assessment, DashboardView, Metric, MetricDeltas, Reading, Timestamp,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Append the full window as a table
    pub raw: bool,
}

/// Wall-clock `%H:%M:%S` of a reading timestamp
pub fn clock_time(timestamp: Timestamp) -> String {
    match Local.timestamp_millis_opt(timestamp as i64).single() {
        Some(time) => time.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

/// Render one full dashboard frame
pub fn dashboard(view: &DashboardView, now: DateTime<Local>, options: &RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}",
        "Dashboard updated at:".bold(),
        now.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "Source: {}", view.source);

    if let Some(err) = &view.connection_error {
        let _ = writeln!(out, "{}", format!("❌ Cannot connect to sensor device. {}", err).as_str().red());
    }
    if view.no_history() {
        let _ = writeln!(
            out,
            "{}",
            "⚠️  No historical data available. Please check the device connection.".yellow()
        );
        return out;
    }

    let (Some(latest), Some(report)) = (view.latest, view.report) else {
        return out;
    };

    let _ = writeln!(out);
    let statuses = [
        report.temperature.to_string(),
        report.humidity.to_string(),
        report.air_quality.to_string(),
    ];
    for (metric, status) in Metric::ALL.iter().zip(statuses) {
        let _ = writeln!(
            out,
            "{:<12} {:>10} {:>12}   Status: {}",
            metric.label().bold(),
            format_value(*metric, latest.value(*metric)),
            format_delta(*metric, view.deltas.as_ref()),
            status
        );
    }

    let _ = writeln!(out);
    match &view.forecast {
        Some(forecast) => {
            let _ = writeln!(out, "{}", "Predictions for Next Data Points".bold());
            let _ = writeln!(out, "{}", header_row());
            for (i, timestamp) in forecast.timestamps.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{:<10} {:>16.2} {:>14.2} {:>19.1}",
                    clock_time(*timestamp),
                    forecast.metric(Metric::Temperature).points[i].predicted_value,
                    forecast.metric(Metric::Humidity).points[i].predicted_value,
                    forecast.metric(Metric::AirQuality).points[i].predicted_value,
                );
            }
        }
        None if view.is_warming_up() => {
            let _ = writeln!(
                out,
                "{} ({} more readings needed)",
                "Collecting more data for predictions...".cyan(),
                view.readings_until_forecast
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}",
                "Forecast unavailable for the current window.".yellow()
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Air Quality Analysis".bold());
    let _ = writeln!(out, "{}", report.air_quality.message);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Overall Environmental Assessment".bold());
    let _ = writeln!(out, "{}", assessment_line(&report.assessment));

    if options.raw {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({} of {})",
            "Raw Data".bold(),
            view.window.len(),
            view.capacity
        );
        out.push_str(&raw_table(&view.window));
    }

    out
}

fn header_row() -> String {
    format!(
        "{:<10} {:>16} {:>14} {:>19}",
        "Time", "Temperature (°C)", "Humidity (%)", "Air Quality (PPM)"
    )
}

/// Window readings, oldest first
pub fn raw_table(window: &[Reading]) -> String {
    let mut out = header_row();
    out.push('\n');
    for reading in window {
        let _ = writeln!(
            out,
            "{:<10} {:>16.1} {:>14.1} {:>19}",
            clock_time(reading.timestamp),
            reading.temperature,
            reading.humidity,
            reading.air_quality
        );
    }
    out
}

fn format_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::AirQuality => format!("{} {}", value as u32, metric.unit()),
        _ => format!("{:.1} {}", value, metric.unit()),
    }
}

/// Signed change since the previous reading, green when it is an improvement
pub fn format_delta(metric: Metric, deltas: Option<&MetricDeltas>) -> ColoredString {
    let Some(deltas) = deltas else {
        return "".normal();
    };

    let change = deltas.get(metric);
    let text = match metric {
        Metric::AirQuality => format!("{:+} {}", change as i64, metric.unit()),
        _ => format!("{:+.1} {}", change, metric.unit()),
    };

    if change == 0.0 {
        text.as_str().normal()
    } else if deltas.is_improvement(metric) {
        text.as_str().green()
    } else {
        text.as_str().red()
    }
}

fn assessment_line(assessment: &Assessment) -> ColoredString {
    let line = assessment.to_string();
    match assessment {
        Assessment::GoodConditions => line.as_str().green(),
        Assessment::MultipleConcerns => line.as_str().red().bold(),
        _ => line.as_str().yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_core::{DeviceReading, FixedTime, Monitor, MonitorConfig, ReadingSource};

    struct Script(Vec<Result<DeviceReading, String>>);

    impl ReadingSource for Script {
        type Error = String;

        fn fetch(&mut self) -> Result<DeviceReading, String> {
            if self.0.is_empty() {
                Err("Error fetching data: connection refused".into())
            } else {
                self.0.remove(0)
            }
        }

        fn describe(&self) -> &str {
            "script"
        }
    }

    fn view_after(script: Vec<Result<DeviceReading, String>>, polls: usize) -> DashboardView {
        colored::control::set_override(false);
        let mut monitor =
            Monitor::new(Script(script), FixedTime::new(0), MonitorConfig::default()).unwrap();
        for _ in 0..polls {
            monitor.poll();
            monitor.clock_mut().advance_secs(5);
        }
        monitor.dashboard()
    }

    fn render(view: &DashboardView, raw: bool) -> String {
        dashboard(view, Local::now(), &RenderOptions { raw })
    }

    #[test]
    fn no_history_stops_after_banner() {
        let out = render(&view_after(vec![], 1), false);
        assert!(out.contains("Cannot connect to sensor device. Error fetching data: connection refused"));
        assert!(out.contains("No historical data available"));
        assert!(!out.contains("Overall Environmental Assessment"));
    }

    #[test]
    fn warm_up_shows_collecting_message() {
        let script = vec![Ok(DeviceReading::new(21.0, 45.0, 80))];
        let out = render(&view_after(script, 1), false);

        assert!(out.contains("Collecting more data for predictions... (4 more readings needed)"));
        assert!(out.contains("21.0 °C"));
        assert!(out.contains("80 PPM"));
        assert!(out.contains("Status: ✅ Comfortable"));
        assert!(out.contains("The air quality is excellent."));
        assert!(out.contains("Good Environmental Conditions"));
    }

    #[test]
    fn forecast_table_has_one_row_per_point() {
        let script = (0..6)
            .map(|i| Ok(DeviceReading::new(20.0 + i as f64, 45.0, 100)))
            .collect();
        let out = render(&view_after(script, 6), false);

        assert!(out.contains("Predictions for Next Data Points"));
        assert!(!out.contains("Collecting more data"));
        let rows = out
            .lines()
            .skip_while(|line| !line.starts_with("Time"))
            .skip(1)
            .take_while(|line| !line.is_empty())
            .count();
        assert_eq!(rows, 5);
        assert!(out.contains("+1.0 °C"));
    }

    #[test]
    fn failed_fit_is_not_reported_as_warm_up() {
        let script = (0..6)
            .map(|i| Ok(DeviceReading::new(20.0 + i as f64, 45.0, 100)))
            .collect();
        let mut view = view_after(script, 6);
        view.forecast = None;
        view.readings_until_forecast = 0;

        let out = render(&view, false);
        assert!(out.contains("Forecast unavailable for the current window."));
        assert!(!out.contains("Collecting more data"));
    }

    #[test]
    fn raw_table_lists_window() {
        let script = vec![
            Ok(DeviceReading::new(21.0, 45.0, 80)),
            Ok(DeviceReading::new(22.0, 44.0, 90)),
        ];
        let out = render(&view_after(script, 2), true);

        assert!(out.contains("Raw Data (2 of 1000)"));
        assert!(out.contains("+10 PPM"));
    }

    #[test]
    fn delta_is_blank_without_previous_reading() {
        colored::control::set_override(false);
        assert_eq!(format_delta(Metric::Temperature, None).to_string(), "");
    }
}
