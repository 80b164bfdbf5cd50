mod laws;
mod scenarios;
