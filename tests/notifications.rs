use std::sync::Arc;
use parking_lot::Mutex;
use sketchpad::{Bound, Document, DocumentEvent, Shape, ShapeKind, Tool, ToolbarState};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rect(color: usize) -> Shape {
    Shape::new(Bound::new(0.25, 0.25, 0.75, 0.75), ShapeKind::Rect, color)
}

// Records every event together with the toolbar state seen at delivery time
fn attach_recorder(doc: &mut Document) -> Arc<Mutex<Vec<(DocumentEvent, ToolbarState)>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    doc.subscribe(Box::new(move |doc: &Document, event: &DocumentEvent| {
        sink.lock().push((event.clone(), ToolbarState::from_document(doc)));
    }));
    log
}

#[test]
fn test_subscriber_receives_attached_first() {
    init_logger();
    let mut doc = Document::new();
    let log = attach_recorder(&mut doc);

    let events = log.lock();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, DocumentEvent::Attached);
}

#[test]
fn test_one_event_per_mutation() {
    init_logger();
    let mut doc = Document::new();
    let log = attach_recorder(&mut doc);

    doc.add_shape(rect(0)).unwrap();
    doc.add_shape(rect(1)).unwrap();
    doc.set_selection(Some(1));
    doc.update_shape(1, rect(2)).unwrap();
    doc.update_shape_mut(1, rect(3)).unwrap();
    doc.set_selected_color(4).unwrap();
    doc.use_draw_tool(ShapeKind::Circle);
    doc.use_move_tool();
    doc.remove_shape(0).unwrap();
    doc.undo().unwrap();
    doc.redo().unwrap();

    let events: Vec<DocumentEvent> = log.lock().iter().map(|(event, _)| event.clone()).collect();
    assert_eq!(
        events,
        vec![
            DocumentEvent::Attached,
            DocumentEvent::ShapeAdded { index: 0 },
            DocumentEvent::ShapeAdded { index: 1 },
            DocumentEvent::SelectionChanged { selected: Some(1) },
            DocumentEvent::ShapeUpdated { index: 1 },
            DocumentEvent::ShapeDragged { index: 1 },
            DocumentEvent::ColorSelected { index: 4 },
            DocumentEvent::ToolChanged { tool: Tool::Draw, shape_kind: ShapeKind::Circle },
            DocumentEvent::ToolChanged { tool: Tool::Move, shape_kind: ShapeKind::Circle },
            DocumentEvent::ShapeRemoved { index: 0 },
            DocumentEvent::Undone { cursor: 3 },
            DocumentEvent::Redone { cursor: 4 },
        ]
    );
}

#[test]
fn test_observers_see_state_after_mutation() {
    init_logger();
    let mut doc = Document::new();
    let log = attach_recorder(&mut doc);

    doc.add_shape(rect(0)).unwrap();
    doc.undo().unwrap();

    let events = log.lock();
    let after_add = events[1].1;
    assert!(after_add.can_undo);
    assert!(!after_add.can_redo);

    let after_undo = events[2].1;
    assert!(!after_undo.can_undo);
    assert!(after_undo.can_redo);
}

#[test]
fn test_failed_calls_do_not_notify() {
    init_logger();
    let mut doc = Document::new();
    let log = attach_recorder(&mut doc);

    assert!(doc.undo().is_err());
    assert!(doc.remove_shape(0).is_err());
    assert!(doc.set_selected_color(10).is_err());

    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    init_logger();
    let mut doc = Document::new();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    let id = doc.subscribe(Box::new(move |_: &Document, _: &DocumentEvent| {
        *sink.lock() += 1;
    }));

    doc.add_shape(rect(0)).unwrap();
    assert!(doc.unsubscribe(id));
    assert!(!doc.unsubscribe(id));
    doc.add_shape(rect(1)).unwrap();

    assert_eq!(*count.lock(), 2);
}

#[test]
fn test_event_stream_can_be_polled() {
    init_logger();
    let mut doc = Document::new();
    let mut events = doc.event_stream();

    doc.add_shape(rect(0)).unwrap();
    doc.set_selection(Some(0));

    assert_eq!(events.try_next().unwrap(), Some(DocumentEvent::ShapeAdded { index: 0 }));
    assert_eq!(
        events.try_next().unwrap(),
        Some(DocumentEvent::SelectionChanged { selected: Some(0) })
    );
    assert!(events.try_next().is_err());
}

#[test]
fn test_dropped_stream_is_pruned() {
    init_logger();
    let mut doc = Document::new();
    drop(doc.event_stream());

    doc.add_shape(rect(0)).unwrap();
    assert_eq!(doc.current_shapes().len(), 1);
}

#[test]
fn test_history_events_are_flagged() {
    assert!(DocumentEvent::Undone { cursor: 0 }.touches_history());
    assert!(DocumentEvent::ShapeRemoved { index: 0 }.touches_history());
    assert!(!DocumentEvent::ShapeDragged { index: 0 }.touches_history());
    assert!(!DocumentEvent::SelectionChanged { selected: None }.touches_history());
}
