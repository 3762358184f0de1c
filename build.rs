//! Compiles the gRPC wire definitions for the user and task endpoints.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The vendored protoc path is only known here, at build-script run time;
    // prost-build discovers the compiler exclusively through the PROTOC
    // environment variable, so the override has to happen in-process. An
    // externally exported PROTOC would reintroduce a system protoc
    // requirement.
    let protoc = protoc_bin_vendored::protoc_bin_path()?;
    // SAFETY: build scripts run single-threaded before any other thread can
    // observe the environment.
    unsafe {
        std::env::set_var("PROTOC", protoc);
    }

    tonic_build::configure()
        .compile_protos(&["proto/user.proto", "proto/task.proto"], &["proto"])?;
    Ok(())
}
