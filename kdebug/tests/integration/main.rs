mod derive;
mod dump;
