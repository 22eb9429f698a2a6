mod common;

use common::{ConnectorEvent, MockResolver, RecordingConnector};
use nativeconf_core::{AotOptions, ConfigurationCollector, ResourcesDescriptor};
use std::sync::Arc;

fn setup() -> (ConfigurationCollector, Arc<RecordingConnector>) {
    let connector = Arc::new(RecordingConnector::new());
    let collector = ConfigurationCollector::new(AotOptions::default(), Arc::new(MockResolver::new()))
        .with_connector(connector.clone());
    (collector, connector)
}

#[test]
fn re_registering_resource_keeps_one_pattern_and_last_bytes() {
    let (mut collector, _connector) = setup();

    collector.register_resource("a.bin", vec![1u8, 2, 3]);
    collector.register_resource("a.bin", vec![9u8]);

    let patterns: Vec<&str> = collector.resources_descriptor().patterns().collect();
    assert_eq!(patterns, vec!["a.bin"]);
    assert_eq!(collector.resource_bytes("a.bin"), Some(&[9u8][..]));
    assert_eq!(collector.store().resource_files().count(), 1);
}

#[test]
fn connector_reads_the_registered_bytes() {
    let (mut collector, connector) = setup();

    collector.register_resource("META-INF/generated.idx", b"index".to_vec());

    assert_eq!(
        connector.events(),
        vec![ConnectorEvent::RegisteredResource {
            name: "META-INF/generated.idx".to_string(),
            bytes: b"index".to_vec(),
        }]
    );
}

#[test]
fn add_resource_routes_bundles_separately() {
    let (mut collector, connector) = setup();

    collector.add_resource("application.properties", false);
    collector.add_resource("messages", true);

    let resources = collector.resources_descriptor();
    assert!(resources.contains_pattern("application.properties"));
    assert!(!resources.contains_bundle("application.properties"));
    assert!(resources.contains_bundle("messages"));
    assert!(!resources.contains_pattern("messages"));
    assert_eq!(connector.events().len(), 2);
}

#[test]
fn resources_descriptor_merge_is_unconditional_and_idempotent() {
    let (mut collector, connector) = setup();
    let mut incoming = ResourcesDescriptor::new();
    incoming.add("static/.*");
    incoming.add_bundle("org.example.Messages");

    collector.add_resources_descriptor(&incoming);
    let once = collector.resources_descriptor().clone();
    collector.add_resources_descriptor(&incoming);

    assert_eq!(collector.resources_descriptor(), &once);
    assert_eq!(
        connector.events(),
        vec![
            ConnectorEvent::ResourcesDescriptor(incoming.clone()),
            ConnectorEvent::ResourcesDescriptor(incoming),
        ]
    );
}

#[test]
fn failing_connector_does_not_roll_back_merge() {
    let connector = Arc::new(RecordingConnector::failing());
    let mut collector =
        ConfigurationCollector::new(AotOptions::default(), Arc::new(MockResolver::new()))
            .with_connector(connector.clone());

    collector.add_resource("schema.sql", false);
    collector.register_resource("data.bin", vec![0xffu8]);

    assert!(collector.resources_descriptor().contains_pattern("schema.sql"));
    assert_eq!(collector.resource_bytes("data.bin"), Some(&[0xffu8][..]));
    assert_eq!(connector.events().len(), 2);
}

#[test]
fn detached_connector_receives_nothing_further() {
    let (mut collector, connector) = setup();
    collector.add_resource("one.txt", false);
    assert!(collector.clear_connector().is_some());
    collector.add_resource("two.txt", false);

    assert!(!collector.has_connector());
    assert_eq!(connector.events().len(), 1);
    assert!(collector.resources_descriptor().contains_pattern("two.txt"));
}
