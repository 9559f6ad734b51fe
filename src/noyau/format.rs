// src/noyau/format.rs
//
// Affichage des valeurs :
// - nombre : deux décimales fixes (3.00)
// - durée  : [hh:]mm:ss, heures omises si nulles, secondes au centième si non entières

/// Nombre : toujours deux décimales.
pub fn format_nombre(x: f64) -> String {
    format!("{x:.2}")
}

/// Durée (secondes) -> "mm:ss" ou "hh:mm:ss".
///
/// On travaille en centièmes entiers pour que l’arrondi (59.999 s) remonte
/// proprement dans les minutes au lieu d’afficher "60.00".
/// Durée négative : signe devant la forme de la valeur absolue.
pub fn format_duree(secondes: f64) -> String {
    if !secondes.is_finite() {
        return format!("{secondes}");
    }

    let centiemes = (secondes.abs() * 100.0).round() as u64;
    let signe = if secondes < 0.0 && centiemes > 0 { "-" } else { "" };

    let hh = centiemes / 360_000;
    let reste = centiemes % 360_000;
    let mm = reste / 6_000;
    let ss_c = reste % 6_000;

    let ss = if ss_c % 100 == 0 {
        format!("{:02}", ss_c / 100)
    } else {
        format!("{:02}.{:02}", ss_c / 100, ss_c % 100)
    };

    if hh > 0 {
        format!("{signe}{hh:02}:{mm:02}:{ss}")
    } else {
        format!("{signe}{mm:02}:{ss}")
    }
}
