//! Trybuild fixture verifying `#[nestconf(crate = "...")]` works with the
//! runtime crate imported under another name.

use nestconf as my_cfg;
use my_cfg::{Configurable, Kwargs};

/// Settings for a service reached through the aliased crate path.
#[derive(Debug, Configurable)]
#[nestconf(crate = "my_cfg")]
struct Service {
    host: Option<String>,
    #[nestconf(default = 8080)]
    port: Option<u16>,
}

fn main() {
    let result = Service::from_kwargs(Kwargs::new().with("host", "localhost"));
    let _: my_cfg::NestconfResult<Service> = result;
    let _: fn() -> ServiceConfig = <ServiceConfig as my_cfg::RecordType>::empty;
}
