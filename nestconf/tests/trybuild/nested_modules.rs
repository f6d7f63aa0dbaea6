//! Trybuild fixture verifying nested and inherited configurables declared in
//! different modules.

mod model {
    use nestconf::Configurable;

    /// Layer sizes.
    #[derive(Debug, Configurable)]
    pub struct Encoder {
        pub width: Option<u32>,
    }

    /// Shared run identity.
    #[derive(Debug, Configurable)]
    pub struct Base {
        pub name: Option<String>,
    }
}

mod run {
    use nestconf::Configurable;

    use crate::model::{Base, Encoder};

    /// A run combining both.
    #[derive(Debug, Configurable)]
    pub struct Run {
        #[nestconf(extends)]
        pub base: Base,
        #[nestconf(nested, default = Encoder { width: Some(16) })]
        pub encoder: Option<Encoder>,
        #[nestconf(nested)]
        pub decoder: Option<crate::model::EncoderConfig>,
    }
}

use nestconf::{Configurable, Kwargs, Record};

fn main() {
    let built = run::Run::from_kwargs(Kwargs::new().with("name", "x"));
    let _ = built.map(|value| value.base.name);
    let record = run::RunConfig::default();
    let _: String = record.to_path_suffix(true);
    let _: &model::BaseConfig = record.base();
    let _: Option<&model::EncoderConfig> = record.encoder();
    let _: Option<&String> = record.base().name();
}
