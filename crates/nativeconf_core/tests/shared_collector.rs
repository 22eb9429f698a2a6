mod common;

use common::{MockResolver, RecordingConnector};
use nativeconf_core::{
    AotOptions, ClassDescriptor, ConfigurationCollector, Flag, SharedCollector,
};
use std::sync::Arc;
use std::thread;

const WORKERS: usize = 8;
const PER_WORKER: usize = 25;

fn resolver() -> MockResolver {
    (0..PER_WORKER).fold(
        MockResolver::new().interface("org.example.Api"),
        |resolver, index| resolver.class(&format!("org.example.Type{index}")),
    )
}

#[test]
fn concurrent_registrations_match_sequential_result() {
    let connector = Arc::new(RecordingConnector::new());
    let shared = SharedCollector::new(
        ConfigurationCollector::new(AotOptions::default(), Arc::new(resolver()))
            .with_connector(connector.clone()),
    );

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                for index in 0..PER_WORKER {
                    shared.add_class_descriptor(
                        ClassDescriptor::new(format!("org.example.Type{index}"))
                            .with_flag(Flag::AllPublicMethods),
                    );
                    shared.add_resource(format!("worker{worker}/file{index}"), false);
                }
                shared.add_proxy(["org.example.Api"], true);
                shared.initialize_at_build_time([format!("org.example.Init{worker}")]);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread");
    }

    let collector = shared.try_into_inner().ok().expect("last handle");
    assert_eq!(collector.reflection_descriptor().len(), PER_WORKER);
    assert_eq!(
        collector.resources_descriptor().patterns().count(),
        WORKERS * PER_WORKER
    );
    assert_eq!(collector.proxies_descriptor().len(), 1);
    assert_eq!(
        collector.initialization_descriptor().buildtime_classes().len(),
        WORKERS
    );
    assert_eq!(
        connector.events().len(),
        WORKERS * (PER_WORKER * 2 + 2)
    );
}

#[test]
fn with_gives_exclusive_access_to_the_collector() {
    let shared = SharedCollector::new(ConfigurationCollector::new(
        AotOptions::default(),
        Arc::new(resolver()),
    ));
    shared.register_resource("blob.bin", vec![7u8]);

    let bytes = shared.with(|collector| collector.resource_bytes("blob.bin").map(<[u8]>::to_vec));
    assert_eq!(bytes, Some(vec![7u8]));
    assert!(shared
        .native_image_properties()
        .ends_with("-H:+InlineBeforeAnalysis\n"));
}
