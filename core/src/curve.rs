/// Stykkevis lineær kurve over (verdi, score)-ankre.
///
/// Stigningstall utledes alltid fra nabo-ankrene ved evaluering – aldri
/// hardkodede desimal-approksimasjoner (de driver fra fasit over tid).
#[derive(Debug, Clone)]
pub struct Curve {
    anchors: Vec<(f64, f64)>,
}

impl Curve {
    /// Ankrene må ha strengt stigende x. Score-aksen kan gå begge veier
    /// (tid: synkende score, repetisjoner: stigende).
    pub fn new(anchors: &[(f64, f64)]) -> Self {
        debug_assert!(anchors.len() >= 2, "kurve trenger minst to ankre");
        debug_assert!(
            anchors.windows(2).all(|w| w[0].0 < w[1].0),
            "kurve-ankre må ha strengt stigende x"
        );
        Self {
            anchors: anchors.to_vec(),
        }
    }

    /// Klampet, stykkevis lineær evaluering.
    /// Utenfor ytterste anker returneres ankerets score (klamp-policy).
    pub fn eval(&self, x: f64) -> f64 {
        let (x_first, y_first) = self.anchors[0];
        let (x_last, y_last) = self.anchors[self.anchors.len() - 1];

        if x <= x_first {
            return y_first;
        }
        if x >= x_last {
            return y_last;
        }

        for w in self.anchors.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if x <= x1 {
                return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
            }
        }

        y_last
    }

    /// Heltallsscore 0–100: avrundet halvt-vekk-fra-null, deretter klampet.
    pub fn score(&self, x: f64) -> u8 {
        self.eval(x).round().clamp(0.0, 100.0) as u8
    }
}
