/// Binary entrypoint for the `primes2` executable.
///
/// Keeps the binary thin: all logic lives in the `primes2_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    primes2_lib::run();
}
