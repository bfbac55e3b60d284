/// Binary entrypoint for the `slugen` executable.
///
/// Keeps the binary thin — all logic lives in the `slugen_lib` crate so unit
/// tests can import library functions directly.
fn main() {
    slugen_lib::run();
}
