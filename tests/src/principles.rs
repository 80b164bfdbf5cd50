mod family;
mod journal;
