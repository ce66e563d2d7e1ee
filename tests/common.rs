#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rho() -> Command {
    cargo_bin_cmd!("rhoraires")
}

/// Unique config path inside the system temp dir; the file is removed first
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_rhoraires"), "conf")
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small listings file mixing recurring schedules, one-off events and bad rows
pub fn write_listings(name: &str) -> String {
    let path = temp_path(&format!("{name}_listings"), "csv");
    let content = "\
id,description
3109,Marché aux Halles  - Tous les jeudis de l'année de 8h - 13h
9385,\"Les Archives [...] Du mardi au samedi, de 10h à 18h.\"
4006,\"Concert hommage [...] Vendredi 16 mai à 20h30 [...]\"
2627,\"Revivez l'essor [...] visite de 2h.[...]Réservation obligatoire\"
x12,Tous les jours de 9h à 12h
11199,\"Ne manquez pas l'exposition [...] Lundi au vendredi I 8h30-12h et 13h30-17h30 I Hôtel de Ville\"
";
    fs::write(&path, content).expect("write listings");
    path
}
