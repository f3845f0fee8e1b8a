use tablechart::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_a_no_op_without_the_telemetry_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn init_installs_a_subscriber_exactly_once() {
    assert!(init_default_tracing());
    // The global subscriber is already set; a second call must report that
    // instead of panicking.
    assert!(!init_default_tracing());
}
