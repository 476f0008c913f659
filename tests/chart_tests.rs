use std::cell::RefCell;
use std::rc::Rc;

use grouped_bar_rs::core::{Series, SubSeries, ViewSize};
use grouped_bar_rs::extensions::{ChartEvent, ChartObserver, ObserverContext};
use grouped_bar_rs::render::NullRenderer;
use grouped_bar_rs::{BarChartConfig, ChartData, ChartError, GroupedBarChart};

type EventLog = Rc<RefCell<Vec<(ChartEvent, ObserverContext)>>>;

struct RecordingObserver {
    id: &'static str,
    events: EventLog,
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        self.id
    }

    fn on_event(&mut self, event: &ChartEvent, context: ObserverContext) {
        self.events.borrow_mut().push((event.clone(), context));
    }
}

fn recording(id: &'static str) -> (Box<dyn ChartObserver>, EventLog) {
    let events = EventLog::default();
    (
        Box::new(RecordingObserver {
            id,
            events: Rc::clone(&events),
        }),
        events,
    )
}

fn chart() -> GroupedBarChart<NullRenderer> {
    GroupedBarChart::new(
        NullRenderer::default(),
        BarChartConfig::new(ViewSize::new(400.0, 300.0)).with_legend(27.0),
    )
    .expect("chart")
}

fn data() -> ChartData {
    ChartData::from_series(vec![
        Series::new(
            "A",
            vec![SubSeries::new("x", 50.0), SubSeries::new("y", 25.0)],
        ),
        Series::new("B", vec![SubSeries::new("x", 10.0)]),
    ])
}

#[test]
fn init_then_render_reaches_renderer() {
    let mut chart = chart();
    chart.init(&data()).expect("init");
    chart.render().expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_bar_count, 3);
    assert_eq!(renderer.last_panel_count, 2);
    assert_eq!(renderer.last_legend_count, 2);
}

#[test]
fn render_without_layout_fails() {
    let mut chart = chart();
    let err = chart.render().expect_err("no layout yet");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn invalid_config_is_rejected() {
    let config = BarChartConfig::new(ViewSize::new(400.0, 300.0)).with_band_padding(1.5, 0.1);
    assert!(GroupedBarChart::new(NullRenderer::default(), config).is_err());

    let mut chart = chart();
    let bad = BarChartConfig::new(ViewSize::new(400.0, 300.0)).with_group_spacing(-1.0);
    assert!(chart.set_config(bad).is_err());
    assert!(chart.config().legend);
}

#[test]
fn series_transform_reads_current_layout() {
    let mut chart = chart();
    let series = Series::new("B", Vec::new());
    assert!(chart.series_transform(&series).is_err());

    chart.init(&data()).expect("init");
    let offset = chart.series_transform(&series).expect("offset");
    assert_eq!(offset.dx, 0.0);
    assert_eq!(offset.dy, 115.0);
}

#[test]
fn observers_receive_layout_and_render_events() {
    let mut chart = chart();
    let (observer, events) = recording("log");
    chart.register_observer(observer).expect("register");

    chart.init(&data()).expect("init");
    chart.render().expect("render");

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0].0,
        ChartEvent::LayoutUpdated {
            generation: 1,
            degenerate: false,
        }
    );
    assert_eq!(events[0].1.bar_count, 3);
    assert_eq!(events[0].1.series_count, 2);
    assert_eq!(events[1].0, ChartEvent::Rendered);
}

#[test]
fn observer_ids_must_be_unique_and_non_empty() {
    let mut chart = chart();
    let (first, _) = recording("log");
    let (duplicate, _) = recording("log");
    let (empty, _) = recording("");

    chart.register_observer(first).expect("register");
    assert!(chart.register_observer(duplicate).is_err());
    assert!(chart.register_observer(empty).is_err());
    assert_eq!(chart.observer_count(), 1);

    assert!(chart.unregister_observer("log"));
    assert!(!chart.unregister_observer("log"));
    assert!(!chart.has_observer("log"));
}

#[test]
fn click_emits_bar_event() {
    let mut chart = chart();
    let (observer, events) = recording("clicks");
    chart.init(&data()).expect("init");
    chart.register_observer(observer).expect("register");

    let hit = chart.click(110.0, 30.0).expect("hit");
    assert_eq!(hit.series, "A");
    assert!(chart.click(1.0, 1.0).is_none());

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].0,
        ChartEvent::BarClicked {
            series: "A".to_owned(),
            subseries: "x".to_owned(),
            value: 50.0,
        }
    );
}

#[test]
fn stale_layout_result_is_dropped() {
    let mut chart = chart();
    let older = chart.begin_layout();
    let newer = chart.begin_layout();

    let mut small = data();
    small.series.truncate(1);
    let stale = chart.compute(&small).expect("stale layout");
    let fresh = chart.compute(&data()).expect("fresh layout");

    assert!(chart.commit_layout(newer, fresh));
    assert!(!chart.commit_layout(older, stale));
    assert_eq!(chart.current_layout().expect("layout").bars.len(), 3);
}

#[test]
fn failed_init_clears_previous_layout() {
    let mut chart = chart();
    chart.init(&data()).expect("init");
    assert!(chart.current_layout().is_some());

    let mut broken = data();
    broken.series.push(Series::new("C", Vec::new()));
    let err = chart.init(&broken).expect_err("C is unknown");

    assert!(matches!(err, ChartError::UnknownSeries { .. }));
    assert!(chart.current_layout().is_none());
    assert!(chart.render().is_err());
}
