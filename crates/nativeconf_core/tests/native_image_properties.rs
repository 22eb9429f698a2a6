mod common;

use common::MockResolver;
use nativeconf_core::{AotOptions, ConfigurationCollector, PropertiesError, REQUIRED_ARGS};
use std::io::Read;
use std::sync::Arc;

fn collector() -> ConfigurationCollector {
    ConfigurationCollector::new(AotOptions::default(), Arc::new(MockResolver::new()))
}

#[test]
fn empty_session_renders_required_args_and_newline() {
    assert_eq!(
        collector().native_image_properties(),
        format!("{REQUIRED_ARGS}\n")
    );
}

#[test]
fn build_time_class_only_renders_single_continuation_line() {
    let mut collector = collector();
    collector.initialize_at_build_time(["x.Y"]);

    assert_eq!(
        collector.native_image_properties(),
        format!("{REQUIRED_ARGS} \\\n--initialize-at-build-time=x.Y\n")
    );
}

#[test]
fn classes_precede_packages_in_insertion_order() {
    let mut collector = collector();
    collector.initialize_packages_at_build_time(["org.b", "org.a"]);
    collector.initialize_at_build_time(["org.b.Z", "org.a.A"]);
    collector.initialize_at_run_time(["io.netty.Epoll"]);
    collector.initialize_packages_at_run_time(["io.grpc"]);

    assert_eq!(
        collector.native_image_properties(),
        format!(
            "{REQUIRED_ARGS} \\\n--initialize-at-build-time=org.b.Z,org.a.A,org.b,org.a \\\n--initialize-at-run-time=io.netty.Epoll,io.grpc\n"
        )
    );
}

#[test]
fn file_and_reader_produce_identical_bytes() {
    let mut collector = collector();
    collector.initialize_at_build_time(["org.slf4j.LoggerFactory"]);
    collector.initialize_packages_at_run_time(["io.netty"]);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("native-image.properties");
    collector
        .write_native_image_properties(&path)
        .expect("properties write");
    let from_file = std::fs::read(&path).expect("read back properties");

    let mut from_reader = Vec::new();
    collector
        .native_image_properties_reader()
        .read_to_end(&mut from_reader)
        .expect("read properties stream");

    assert_eq!(from_file, from_reader);
    assert_eq!(from_file, collector.native_image_properties().into_bytes());
}

#[test]
fn write_failure_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("native-image.properties");

    let err = collector()
        .write_native_image_properties(&path)
        .expect_err("parent directory does not exist");

    let PropertiesError::Io { path: failed, .. } = &err;
    assert_eq!(failed, &path);
    assert!(err.to_string().contains("native-image.properties"));
}
