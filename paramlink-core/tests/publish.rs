use canvas::{Document, DocumentObject, NumberSlider, TextPanel};
use paramlink_core::{ParameterEnvelope, ParameterPublisher, PARAMETERS_ACTION};
use uuid::Uuid;

fn add_slider(doc: &mut Document, name: &str, value: f64) -> Uuid {
    doc.add_object(DocumentObject::NumberSlider(NumberSlider::new(
        name, 0.0, 100.0, 0.5, value,
    )))
}

#[test]
fn snapshots_follow_port_then_connection_order() {
    let mut doc = Document::new();
    let s1 = add_slider(&mut doc, "alpha", 1.0);
    let s2 = add_slider(&mut doc, "beta", 2.0);
    let s3 = add_slider(&mut doc, "gamma", 3.0);

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, s1);
    publisher.connect(0, s2);
    publisher.connect(1, s3);

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.action, PARAMETERS_ACTION);

    let names: Vec<&str> = envelope.data.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    assert_eq!(output.guids, Some(vec![s1, s2, s3]));
}

#[test]
fn non_slider_sources_are_skipped() {
    let mut doc = Document::new();
    let slider = add_slider(&mut doc, "alpha", 1.0);
    let panel = doc.add_object(DocumentObject::TextPanel(TextPanel::new("Panel", "note")));

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, panel);
    publisher.connect(0, slider);

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].guid, slider);
    assert_eq!(output.guids, Some(vec![slider]));
}

#[test]
fn deleted_sources_are_skipped() {
    let mut doc = Document::new();
    let kept = add_slider(&mut doc, "alpha", 1.0);
    let deleted = add_slider(&mut doc, "beta", 2.0);

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, deleted);
    publisher.connect(0, kept);
    doc.remove_object(deleted);

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].guid, kept);
}

#[test]
fn hidden_publisher_suppresses_the_guid_output() {
    let mut doc = Document::new();
    let slider = add_slider(&mut doc, "alpha", 1.0);

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, slider);
    publisher.set_hidden(true);

    let output = publisher.solve(&doc).expect("solve");
    assert!(output.guids.is_none());
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.data.len(), 1);
}

#[test]
fn snapshot_name_prefers_the_nickname() {
    let mut doc = Document::new();
    let mut slider = NumberSlider::new("Number Slider", 0.0, 1.0, 0.01, 0.25);
    slider.nickname = "radius".to_string();
    let id = doc.add_object(DocumentObject::NumberSlider(slider));

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, id);

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.data[0].name, "radius");
}

#[test]
fn snapshot_fields_keep_the_wire_order() {
    let mut doc = Document::new();
    let slider = add_slider(&mut doc, "alpha", 1.0);

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, slider);

    let output = publisher.solve(&doc).expect("solve");
    let positions: Vec<usize> = ["\"step\"", "\"min\"", "\"max\"", "\"name\"", "\"value\"", "\"guid\""]
        .iter()
        .map(|field| output.json.find(field).expect("field present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    // The envelope itself leads with the action tag.
    assert!(output.json.find("\"action\"").expect("action") < positions[0]);
}

#[test]
fn full_precision_survives_the_round_trip() {
    let mut doc = Document::new();
    let id = doc.add_object(DocumentObject::NumberSlider(NumberSlider::new(
        "precise",
        -1.0,
        1.0,
        0.000001,
        0.123456789012345,
    )));

    let mut publisher = ParameterPublisher::new();
    publisher.connect(0, id);

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.data[0].value, 0.123456789012345);
    assert_eq!(envelope.data[0].step, 0.000001);
    assert_eq!(envelope.data[0].guid, id);
}

#[test]
fn empty_ports_produce_an_empty_envelope() {
    let doc = Document::new();
    let publisher = ParameterPublisher::new();

    let output = publisher.solve(&doc).expect("solve");
    let envelope = ParameterEnvelope::from_json(&output.json).expect("decode");
    assert_eq!(envelope.action, PARAMETERS_ACTION);
    assert!(envelope.data.is_empty());
    assert_eq!(output.guids, Some(Vec::new()));
}
