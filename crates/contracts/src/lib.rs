//! Contract bindings generated from the checked-in build artifacts.
//!
//! The artifacts under `./artifacts` are the output of the Solidity build and
//! contain both the ABI and the creation bytecode, so the generated modules
//! expose `deploy`/`deploy_builder` in addition to the usual call bindings.

pub use alloy::providers::DynProvider as Provider;

macro_rules! bindings {
    ($contract:ident) => {
        paste::paste! {
            // Generate the main bindings in a private module. That allows
            // us to re-export all items in our own module while also adding
            // some items ourselves.
            #[allow(non_snake_case)]
            mod [<$contract Private>] {
                alloy::sol!(
                    #[allow(missing_docs)]
                    #[sol(rpc)]
                    $contract,
                    concat!("./artifacts/", stringify!($contract), ".json"),
                );
            }

            #[allow(non_snake_case)]
            pub mod $contract {
                use alloy::providers::DynProvider;

                pub use super::[<$contract Private>]::*;
                pub type Instance = $contract::[<$contract Instance>]<DynProvider>;
            }
        }
    };
}

bindings!(PropertyToken);
