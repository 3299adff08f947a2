use ncollide2d::na::Point3;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point3<f64>")]
pub struct Point3f64 {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Serialize)]
struct Point3Ref(#[serde(with = "Point3f64")] Point3<f64>);

/// Serializes a slice of points as a sequence of `{x, y, z}` objects
pub fn point3_seq<S: Serializer>(points: &[Point3<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| Point3Ref(*p)))
}
