use std::collections::HashMap;
use std::env::args;
use std::fs;
use std::fs::remove_dir_all;
use std::time;

use indicatif::{MultiProgress, ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use log::{info, LevelFilter, SetLoggerError};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use ndarray::Array;
use ndarray_rand::RandomExt;
use rand::distributions::Uniform;
use rand::{thread_rng, Rng};
use rayon::prelude::*;

use map2d::demo_pref::DemoPref;
use map2d::{create_instance, HashMap2D, Map2D};

const DEFAULT_PARAMS: &str = "rows=100\ncols=60\ndensity=0.25\nvmax=100\npasses=4";

fn config_logger(parallel_run: i32) -> Result<Handle, SetLoggerError> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build("report/map2d.log")
        .unwrap();
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();
    let mut root_builder = Root::builder();
    let mut config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)));
    if parallel_run == 0 {
        config = config.appender(Appender::builder().build("console", Box::new(console)));
        root_builder = root_builder.appender("console");
    }
    let c = config.build(root_builder.appender("logfile").build(LevelFilter::Info));
    log4rs::init_config(c.unwrap())
}

fn load_pref(param_file: &str) -> DemoPref {
    let conf = fs::read_to_string(param_file).unwrap_or_else(|e| {
        info!("{} not readable ({}), using built-in defaults", param_file, e);
        DEFAULT_PARAMS.to_string()
    });
    serde_ini::from_str(&conf).unwrap_or_else(|e| {
        info!("{} not parseable ({}), using built-in defaults", param_file, e);
        serde_ini::from_str(DEFAULT_PARAMS).unwrap()
    })
}

fn create_2x2_map() -> HashMap2D<String, i32, f64> {
    let mut map = create_instance();
    map.put("A".to_string(), 1, 2.3);
    map.put("A".to_string(), 2, 2.4);
    map.put("B".to_string(), 1, 2.5);
    map.put("B".to_string(), 2, 2.6);
    map
}

fn view_snapshots() {
    let mut map = create_2x2_map();
    info!("sample map holds {} values in {} rows", map.size(), map.row_map_view().len());
    info!("row A -> {:?}", map.row_view(&"A".to_string()));
    info!("column 1 -> {:?}", map.column_view(&1));
    let result = map.row_map_view();
    map.remove(&"A".to_string(), &1);
    // the snapshot must not see the removal
    info!(
        "after remove: snapshot row A still holds {}, live map holds {}",
        result["A"].len(),
        map.size()
    );
}

fn fill_external_target() {
    let map = create_2x2_map();
    let mut to_fill: HashMap<i32, f64> = HashMap::new();
    map.fill_map_from_row(&mut to_fill, &"A".to_string());
    info!("target after filling from row A: {} entries", to_fill.len());
    map.fill_map_from_row(&mut to_fill, &"C".to_string());
    info!("target after filling from absent row C: {} entries", to_fill.len());
}

fn length_keyed_copy() {
    let mut map = create_instance::<String, i32, f64>();
    map.put("A".to_string(), 1, 1.0);
    map.put("A".to_string(), 2, 2.0);
    map.put("BB".to_string(), 1, 3.0);
    map.put("BB".to_string(), 2, 4.0);
    let converted = map.copy_with_conversion(|r| r.len(), |c| *c, |v| *v);
    info!(
        "rows A and BB collide on length: {} of {} values survive",
        converted.size(),
        map.size()
    );
}

fn dense_to_sparse(pref: &DemoPref) {
    let dense = Array::random(
        (pref.rows() as usize, pref.cols() as usize),
        Uniform::new(0, pref.vmax()),
    );
    let map = HashMap2D::from(&dense);
    info!(
        "dense {}x{} grid loaded: {} values, column 0 holds {}",
        pref.rows(),
        pref.cols(),
        map.size(),
        map.column_view(&0).len()
    );
}

fn run_fill_pass(pref: &DemoPref, pass: i32) -> usize {
    let mut rng = thread_rng();
    let mut map = create_instance::<i32, i32, i32>();
    for row in 0..pref.rows() {
        for col in 0..pref.cols() {
            if rng.gen_bool(pref.density() as f64) {
                map.put(row, col, rng.gen_range(0..pref.vmax()));
            }
        }
    }
    let filled = map.size();
    let mut removed = 0;
    for k in 0..pref.rows().min(pref.cols()) {
        if map.remove(&k, &k).is_some() {
            removed += 1;
        }
    }
    info!(
        "pass {}: filled {}, removed {} on the diagonal, {} columns in use",
        pass,
        filled,
        removed,
        map.column_map_view().len()
    );
    map.size()
}

fn main() {
    let multi_progress_bar = MultiProgress::new();
    let sty = ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7} {msg}",
    )
    .unwrap()
    .progress_chars("##-");

    let _ = remove_dir_all("report");
    let param_file = args().nth(1).unwrap_or(format!("params.conf"));
    let parallel_run = args().nth(2).unwrap_or(format!("0"));
    config_logger(if parallel_run == "0" { 0 } else { 1 }).unwrap();
    let pref = load_pref(&param_file);

    view_snapshots();
    fill_external_target();
    length_keyed_copy();
    dense_to_sparse(&pref);

    let pb_all_passes = multi_progress_bar.add(ProgressBar::new(pref.passes() as u64));
    pb_all_passes.set_style(sty.clone());

    let now = time::Instant::now();
    let mut result: Vec<usize> = vec![];
    if parallel_run == "1" {
        println!("Running parallel version, will log to file.");
        let pref_clone = pref.clone();
        (0..pref.passes())
            .into_par_iter()
            .progress_with(pb_all_passes)
            .map(move |pass| run_fill_pass(&pref_clone, pass))
            .collect_into_vec(&mut result);
    } else {
        info!("Running normal version.");
        result = (0..pref.passes())
            .into_iter()
            .progress_with(pb_all_passes)
            .map(|pass| run_fill_pass(&pref, pass))
            .collect();
    }
    let total: usize = result.iter().sum();
    info!(
        "{} passes kept {} values in total, {:.1} per pass",
        result.len(),
        total,
        total as f32 / result.len() as f32
    );
    println!("took {} secs", now.elapsed().as_secs())
}
