// pageview front ends
// `view` holds the pure render functions; `console` drives them from stdin.

pub mod console;
pub mod view;
