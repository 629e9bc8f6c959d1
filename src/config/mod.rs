/*!
Configuration of a context.

All configuration for a context is contained within a [Config], which is fixed when the context is built.

```rust
# use prop_chain::config::{Config, Engine};
let mut config = Config::default();
config.engine.value = Engine::Forward;
config.preprocessing.value = true;

assert_eq!(config.engine.to_string(), "engine: forward");
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod engine;
pub use engine::Engine;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which engine to use when solving.
    pub engine: ConfigOption<Engine>,

    /// Rewrite each top-level implication to a disjunction before a solve.
    pub preprocessing: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine: ConfigOption {
                name: "engine",
                value: Engine::Sld,
            },

            preprocessing: ConfigOption {
                name: "preprocessing",
                value: false,
            },
        }
    }
}
