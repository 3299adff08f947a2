use ncollide2d::na::{Point3, RealField};

/// Return the distance between two 3D points
pub fn dist3<N: RealField + Copy>(a: &Point3<N>, b: &Point3<N>) -> N {
    (a - b).norm()
}

/// Returns the length of the shortest edge of a closed polygon given by its corner points
pub fn shortest_edge<N: RealField + Copy>(corners: &[Point3<N>]) -> Option<N> {
    let n = corners.len();
    if n < 2 {
        return None;
    }

    (0..n)
        .map(|i| dist3(&corners[i], &corners[(i + 1) % n]))
        .reduce(|a, b| a.min(b))
}
