// Bonzi Browser services
// Services that sit beside the shell state: configuration loading.

pub mod settings_engine;
