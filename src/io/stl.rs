use crate::triangulated::Triangulated3D;
use std::io::Cursor;

/// Writes every triangle of `shape` as an ASCII STL solid called `name`.
///
/// ```rust
/// # use rackgen::{GearingParameters, ProfileBuilder};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let params = GearingParameters::default();
/// let build = ProfileBuilder::new(&params).build()?;
/// let solid = build.shape.solid().expect("default rack has height");
/// let text = solid.to_stl_ascii("rack");
/// assert!(text.starts_with("solid rack"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Writes every triangle of `shape` as binary STL, coordinates narrowed to `f32`.
///
/// Binary STL has no solid name, so `_name` only mirrors [`to_stl_ascii`].
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::with_capacity(shape.triangle_count());

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl crate::mesh::Mesh {
    /// See [`to_stl_ascii`].
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    /// See [`to_stl_binary`].
    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
