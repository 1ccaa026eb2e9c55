use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct DemoPref {
    // number of rows in the randomly filled demonstration grid
    rows: i32,
    // number of columns in the randomly filled demonstration grid
    cols: i32,
    // fraction of coordinates that receive a value during a fill pass
    density: f32,
    // values are drawn uniformly from 0..vmax
    vmax: i32,
    // number of independent fill passes to run
    passes: i32,
}

impl DemoPref {
    pub fn rows(&self) -> i32 {
        self.rows
    }
    pub fn cols(&self) -> i32 {
        self.cols
    }
    pub fn density(&self) -> f32 {
        self.density
    }
    pub fn vmax(&self) -> i32 {
        self.vmax
    }
    pub fn passes(&self) -> i32 {
        self.passes
    }
}

#[test]
fn test_pref_from_ini() {
    let conf = "rows=40\ncols=25\ndensity=0.2\nvmax=1000\npasses=3";
    let pref: DemoPref = serde_ini::from_str(conf).unwrap();
    assert_eq!(pref.rows(), 40);
    assert_eq!(pref.cols(), 25);
    assert_eq!(pref.density(), 0.2);
    assert_eq!(pref.vmax(), 1000);
    assert_eq!(pref.passes(), 3);
}
