//! PLY format engine.
//!
//! Implements the self-describing PLY header grammar
//! (`Magic → Format → HeaderBody* → EndHeader → Body`) with three body
//! variants: ascii, binary little-endian and binary big-endian, all at
//! version 1.0. The format line inside a file selects the variant that
//! decodes the body, whichever variant started the read.
//!
//! Reads go through [`RawMesh`]; faces are triangles on that boundary, so
//! a face record with more than three indices is consumed fully but only
//! its first three indices are kept.

use std::io::{BufRead, Write};

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use meshio_core::attribute::AttributeKind;
use meshio_core::error::{MeshIoError, MeshResult};
use meshio_core::quantize;
use meshio_core::raw_mesh::RawMesh;
use meshio_core::wire_type::ScalarWireType;

use crate::format::MeshFormat;

const MAGIC: &str = "ply";
const FORMAT: &str = "format";
const COMMENT: &str = "comment";
const ELEMENT: &str = "element";
const VERTEX: &str = "vertex";
const FACE: &str = "face";
const PROPERTY: &str = "property";
const LIST: &str = "list";
const VERTEX_INDEX: &str = "vertex_index";
const END_HEADER: &str = "end_header";
const VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlyEncoding {
    Ascii,
    BinaryLittleEndian,
    BinaryBigEndian,
}

impl PlyEncoding {
    fn token(self) -> &'static str {
        match self {
            PlyEncoding::Ascii => "ascii",
            PlyEncoding::BinaryLittleEndian => "binary_little_endian",
            PlyEncoding::BinaryBigEndian => "binary_big_endian",
        }
    }
}

/// One concrete PLY variant.
#[derive(Debug, Clone, Copy)]
pub struct PlyFormat {
    encoding: PlyEncoding,
}

impl PlyFormat {
    pub fn ascii_1_0() -> Self {
        Self {
            encoding: PlyEncoding::Ascii,
        }
    }

    pub fn binary_little_endian_1_0() -> Self {
        Self {
            encoding: PlyEncoding::BinaryLittleEndian,
        }
    }

    pub fn binary_big_endian_1_0() -> Self {
        Self {
            encoding: PlyEncoding::BinaryBigEndian,
        }
    }

    /// The (encoding, version) table. Registering a new variant means
    /// adding one arm here.
    fn from_tokens(encoding: &str, version: &str) -> Option<Self> {
        match (encoding, version) {
            ("ascii", VERSION) => Some(Self::ascii_1_0()),
            ("binary_little_endian", VERSION) => Some(Self::binary_little_endian_1_0()),
            ("binary_big_endian", VERSION) => Some(Self::binary_big_endian_1_0()),
            _ => None,
        }
    }
}

/// Everything the header declares that the body decode needs.
#[derive(Debug)]
struct PlyHeader {
    vertices_first: bool,
    schema: Vec<(ScalarWireType, AttributeKind)>,
    vertex_count: usize,
    face_count: usize,
    count_type: ScalarWireType,
    index_type: ScalarWireType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Vertex,
    Face,
    Other,
}

impl MeshFormat for PlyFormat {
    fn file_extension(&self) -> &'static str {
        "ply"
    }

    fn read_raw(&self, input: &mut dyn BufRead) -> MeshResult<RawMesh> {
        let line = read_header_line(input)?;
        if line != MAGIC {
            return Err(MeshIoError::new(format!(
                "unrecognised magic: {line}, \"{MAGIC}\" expected"
            )));
        }
        let line = read_header_line(input)?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let engine = match parts.as_slice() {
            [FORMAT, encoding, version] => PlyFormat::from_tokens(encoding, version)
                .ok_or_else(|| {
                    MeshIoError::new(format!(
                        "unrecognised encoding-version combination: {line}"
                    ))
                })?,
            _ => {
                return Err(MeshIoError::new(format!("unrecognised format: {line}")));
            }
        };
        let header = read_header(input)?;

        let mut raw = RawMesh::new();
        raw.set_vertex_count(header.vertex_count);
        if header.vertices_first {
            engine.read_vertex_section(input, &header, &mut raw)?;
            engine.read_face_section(input, &header, &mut raw)?;
        } else {
            engine.read_face_section(input, &header, &mut raw)?;
            engine.read_vertex_section(input, &header, &mut raw)?;
        }
        Ok(raw)
    }

    fn write_raw(&self, raw: &RawMesh, output: &mut dyn Write) -> MeshResult<()> {
        let layout = raw.layout();
        writeln!(output, "{MAGIC}")?;
        writeln!(output, "{FORMAT} {} {VERSION}", self.encoding.token())?;
        writeln!(output, "{ELEMENT} {VERTEX} {}", raw.vertex_count())?;
        for &kind in layout.kinds() {
            // Attributes are always written as float; quantization is a
            // read-side concern in this family.
            writeln!(output, "{PROPERTY} float {}", kind.property_name())?;
        }
        writeln!(output, "{ELEMENT} {FACE} {}", raw.triangle_count())?;
        writeln!(output, "{PROPERTY} {LIST} uchar int {VERTEX_INDEX}")?;
        writeln!(output, "{END_HEADER}")?;

        match self.encoding {
            PlyEncoding::Ascii => {
                for vertex in 0..raw.vertex_count() {
                    let mut line = String::new();
                    for &kind in layout.kinds() {
                        if !line.is_empty() {
                            line.push(' ');
                        }
                        let datum = raw.attribute_datum(kind, vertex).unwrap_or(0.0);
                        line.push_str(&datum.to_string());
                    }
                    writeln!(output, "{line}")?;
                }
                for face in 0..raw.triangle_count() {
                    let [a, b, c] = raw.triangle(face);
                    writeln!(output, "3 {a} {b} {c}")?;
                }
                Ok(())
            }
            PlyEncoding::BinaryLittleEndian => write_binary_body::<LittleEndian>(raw, output),
            PlyEncoding::BinaryBigEndian => write_binary_body::<BigEndian>(raw, output),
        }
    }
}

impl PlyFormat {
    fn read_vertex_section(
        &self,
        input: &mut dyn BufRead,
        header: &PlyHeader,
        raw: &mut RawMesh,
    ) -> MeshResult<()> {
        match self.encoding {
            PlyEncoding::Ascii => {
                for vertex in 0..header.vertex_count {
                    let line = read_line(input)?;
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    if tokens.len() < header.schema.len() {
                        return Err(MeshIoError::new(format!("malformed vertex line: {line}")));
                    }
                    for (&(wire_type, kind), token) in header.schema.iter().zip(&tokens) {
                        let datum = token.parse::<f64>().map_err(|_| {
                            MeshIoError::new(format!("malformed vertex datum: {token}"))
                        })? as f32;
                        // Keep ascii data inside what the declared wire
                        // type can represent, like the binary decoders do.
                        raw.set_attribute_datum(kind, vertex, quantize::saturate(wire_type, datum))?;
                    }
                }
                Ok(())
            }
            PlyEncoding::BinaryLittleEndian => {
                read_binary_vertices::<LittleEndian>(input, header, raw)
            }
            PlyEncoding::BinaryBigEndian => read_binary_vertices::<BigEndian>(input, header, raw),
        }
    }

    fn read_face_section(
        &self,
        input: &mut dyn BufRead,
        header: &PlyHeader,
        raw: &mut RawMesh,
    ) -> MeshResult<()> {
        match self.encoding {
            PlyEncoding::Ascii => {
                for face in 0..header.face_count {
                    let line = read_line(input)?;
                    raw.set_triangle(face, parse_ascii_face(&line)?);
                }
                Ok(())
            }
            PlyEncoding::BinaryLittleEndian => read_binary_faces::<LittleEndian>(input, header, raw),
            PlyEncoding::BinaryBigEndian => read_binary_faces::<BigEndian>(input, header, raw),
        }
    }
}

/// Parses the `HeaderBody*` section up to and including `end_header`.
fn read_header(input: &mut dyn BufRead) -> MeshResult<PlyHeader> {
    let mut section = Section::None;
    let mut first_counted_section: Option<Section> = None;
    let mut vertex_count: Option<usize> = None;
    let mut face_count: Option<usize> = None;
    let mut schema: Vec<(ScalarWireType, AttributeKind)> = Vec::new();
    let mut list_types: Option<(ScalarWireType, ScalarWireType)> = None;

    loop {
        let line = read_header_line(input)?;
        if line == END_HEADER {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [ELEMENT, VERTEX, count] => {
                section = Section::Vertex;
                first_counted_section.get_or_insert(Section::Vertex);
                vertex_count = Some(parse_count(count, &line)?);
            }
            [ELEMENT, FACE, count] => {
                section = Section::Face;
                first_counted_section.get_or_insert(Section::Face);
                face_count = Some(parse_count(count, &line)?);
            }
            [ELEMENT, ..] => {
                // Unknown elements are skipped along with their properties.
                section = Section::Other;
            }
            [PROPERTY, LIST, count_token, index_token, VERTEX_INDEX]
                if section == Section::Face =>
            {
                if let (Some(count_type), Some(index_type)) = (
                    ScalarWireType::from_token(count_token),
                    ScalarWireType::from_token(index_token),
                ) {
                    list_types = Some((count_type, index_type));
                }
            }
            [PROPERTY, type_token, name] if section == Section::Vertex => {
                match (
                    ScalarWireType::from_token(type_token),
                    AttributeKind::from_property_name(name),
                ) {
                    (Some(wire_type), Some(kind)) => schema.push((wire_type, kind)),
                    _ => {
                        return Err(MeshIoError::new(format!(
                            "unrecognised vertex property: {type_token} - {name}"
                        )));
                    }
                }
            }
            // Properties of face and unknown elements other than the
            // vertex_index list carry no mesh data here.
            _ => {}
        }
    }

    let vertex_count =
        vertex_count.ok_or_else(|| MeshIoError::new("failed to read vertex data"))?;
    let (face_count, (count_type, index_type)) = match (face_count, list_types) {
        (Some(face_count), Some(types)) => (face_count, types),
        _ => return Err(MeshIoError::new("failed to read face indices")),
    };
    Ok(PlyHeader {
        vertices_first: first_counted_section != Some(Section::Face),
        schema,
        vertex_count,
        face_count,
        count_type,
        index_type,
    })
}

fn read_binary_vertices<B: ByteOrder>(
    input: &mut dyn BufRead,
    header: &PlyHeader,
    raw: &mut RawMesh,
) -> MeshResult<()> {
    for vertex in 0..header.vertex_count {
        for &(wire_type, kind) in &header.schema {
            let datum = quantize::read_datum::<_, B>(input, wire_type)?;
            raw.set_attribute_datum(kind, vertex, datum)?;
        }
    }
    Ok(())
}

fn read_binary_faces<B: ByteOrder>(
    input: &mut dyn BufRead,
    header: &PlyHeader,
    raw: &mut RawMesh,
) -> MeshResult<()> {
    for face in 0..header.face_count {
        let count = quantize::read_index::<_, B>(input, header.count_type)?;
        if count < 3 {
            return Err(MeshIoError::new(format!(
                "face record with {count} indices"
            )));
        }
        let mut corners = [0u32; 3];
        for slot in 0..count as usize {
            let index = quantize::read_index::<_, B>(input, header.index_type)?;
            if slot < 3 {
                corners[slot] = u32::try_from(index).map_err(|_| {
                    MeshIoError::new(format!("vertex index out of range: {index}"))
                })?;
            }
        }
        raw.set_triangle(face, corners);
    }
    Ok(())
}

fn write_binary_body<B: ByteOrder>(raw: &RawMesh, output: &mut dyn Write) -> MeshResult<()> {
    let layout = raw.layout();
    for vertex in 0..raw.vertex_count() {
        for &kind in layout.kinds() {
            let datum = raw.attribute_datum(kind, vertex).unwrap_or(0.0);
            quantize::write_datum::<_, B>(output, ScalarWireType::Float32, datum)?;
        }
    }
    for face in 0..raw.triangle_count() {
        quantize::write_index::<_, B>(output, ScalarWireType::Uint8, 3)?;
        for corner in raw.triangle(face) {
            quantize::write_index::<_, B>(output, ScalarWireType::Int32, corner as i64)?;
        }
    }
    Ok(())
}

fn parse_ascii_face(line: &str) -> MeshResult<[u32; 3]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let malformed = || MeshIoError::new(format!("malformed face record: {line}"));
    let count: usize = tokens.first().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
    // The whole record is consumed with the line; only the first three
    // indices of a longer list survive as one triangle.
    if count < 3 || tokens.len() < count + 1 {
        return Err(malformed());
    }
    let mut corners = [0u32; 3];
    for (slot, token) in tokens[1..4].iter().enumerate() {
        corners[slot] = token.parse().map_err(|_| malformed())?;
    }
    Ok(corners)
}

fn parse_count(token: &str, line: &str) -> MeshResult<usize> {
    token
        .parse()
        .map_err(|_| MeshIoError::new(format!("malformed element count: {line}")))
}

/// Reads one line, stripping the trailing newline (and carriage return).
fn read_line(input: &mut dyn BufRead) -> MeshResult<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(MeshIoError::new("unexpected end of stream"));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Reads the next header line, skipping comments verbatim.
fn read_header_line(input: &mut dyn BufRead) -> MeshResult<String> {
    loop {
        let line = read_line(input)?;
        if !line.starts_with(COMMENT) {
            return Ok(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{build_mesh, read_mesh, write_mesh};
    use meshio_core::attribute::AttributeLayout;
    use meshio_mesh::MeshStore;
    use std::io::Cursor;

    const UNIT_TRIANGLE: &str = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_index
end_header
0 0 0
1 0 0
0 1 0
3 0 1 2
";

    fn read_ascii(text: &str) -> MeshResult<MeshStore> {
        let mut builder = MeshStore::new();
        read_mesh(
            &PlyFormat::ascii_1_0(),
            &mut builder,
            &mut Cursor::new(text.as_bytes()),
        )
    }

    fn unit_triangle_store() -> MeshStore {
        let mut store = MeshStore::new();
        store.set_layout(
            AttributeLayout::with_kinds(&[
                AttributeKind::PositionX,
                AttributeKind::PositionY,
                AttributeKind::PositionZ,
            ])
            .unwrap(),
        );
        store.set_vertex_count(3);
        store.set_face_count(1);
        store.set_vertex_row(0, &[0.0, 0.0, 0.0]).unwrap();
        store.set_vertex_row(1, &[1.0, 0.0, 0.0]).unwrap();
        store.set_vertex_row(2, &[0.0, 1.0, 0.0]).unwrap();
        store.set_face_slots(0, &[0, 1, 2]).unwrap();
        store
    }

    #[test]
    fn test_reads_unit_triangle() {
        let mesh = read_ascii(UNIT_TRIANGLE).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.face_slots(0).unwrap(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_row(0).unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertex_row(1).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertex_row(2).unwrap(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_ascii_round_trip() {
        let store = unit_triangle_store();
        let mut bytes = Vec::new();
        write_mesh(&PlyFormat::ascii_1_0(), &store, &mut bytes).unwrap();

        let mut builder = MeshStore::new();
        let back = read_mesh(
            &PlyFormat::ascii_1_0(),
            &mut builder,
            &mut Cursor::new(&bytes),
        )
        .unwrap();
        assert_eq!(back.vertex_count(), store.vertex_count());
        assert_eq!(back.face_count(), store.face_count());
        assert_eq!(back.layout(), store.layout());
        for vertex in 0..3 {
            assert_eq!(back.vertex_row(vertex).unwrap(), store.vertex_row(vertex).unwrap());
        }
        assert_eq!(back.face_slots(0).unwrap(), store.face_slots(0).unwrap());
    }

    #[test]
    fn test_binary_round_trips() {
        let store = unit_triangle_store();
        for format in [
            PlyFormat::binary_little_endian_1_0(),
            PlyFormat::binary_big_endian_1_0(),
        ] {
            let mut bytes = Vec::new();
            write_mesh(&format, &store, &mut bytes).unwrap();

            let mut builder = MeshStore::new();
            let back = read_mesh(&format, &mut builder, &mut Cursor::new(&bytes)).unwrap();
            assert_eq!(back.vertex_count(), 3);
            assert_eq!(back.vertex_row(1).unwrap(), &[1.0, 0.0, 0.0]);
            assert_eq!(back.face_slots(0).unwrap(), &[0, 1, 2]);
        }
    }

    #[test]
    fn test_format_line_selects_the_engine() {
        // A binary-LE file handed to the ascii engine decodes as binary.
        let store = unit_triangle_store();
        let mut bytes = Vec::new();
        write_mesh(&PlyFormat::binary_little_endian_1_0(), &store, &mut bytes).unwrap();

        let mut builder = MeshStore::new();
        let back = read_mesh(
            &PlyFormat::ascii_1_0(),
            &mut builder,
            &mut Cursor::new(&bytes),
        )
        .unwrap();
        assert_eq!(back.vertex_count(), 3);
        assert_eq!(back.face_slots(0).unwrap(), &[0, 1, 2]);
    }

    #[test]
    fn test_faces_first_header_order_is_replayed() {
        let faces_first = "\
ply
format ascii 1.0
element face 1
property list uchar int vertex_index
element vertex 3
property float x
property float y
property float z
end_header
3 0 1 2
0 0 0
1 0 0
0 1 0
";
        let mesh = read_ascii(faces_first).unwrap();
        let reference = read_ascii(UNIT_TRIANGLE).unwrap();
        assert_eq!(mesh.face_slots(0).unwrap(), reference.face_slots(0).unwrap());
        for vertex in 0..3 {
            assert_eq!(
                mesh.vertex_row(vertex).unwrap(),
                reference.vertex_row(vertex).unwrap()
            );
        }
    }

    #[test]
    fn test_comments_are_skipped_everywhere_in_header() {
        let commented = "\
comment leading comment
ply
comment after magic
format ascii 1.0
comment between sections
element vertex 1
property float x
element face 1
property list uchar int vertex_index
comment before end
end_header
4.5
3 0 0 0
";
        let mesh = read_ascii(commented).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.attribute(0, AttributeKind::PositionX).unwrap(), 4.5);
    }

    #[test]
    fn test_long_face_list_keeps_first_three() {
        let quad = "\
ply
format ascii 1.0
element vertex 4
property float x
element face 1
property list uchar int vertex_index
end_header
0
1
2
3
4 0 1 2 3
";
        let mesh = read_ascii(quad).unwrap();
        assert_eq!(mesh.face_slots(0).unwrap(), &[0, 1, 2]);
    }

    #[test]
    fn test_short_face_list_is_malformed() {
        let source = "\
ply
format ascii 1.0
element vertex 2
property float x
element face 1
property list uchar int vertex_index
end_header
0
1
2 0 1
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("malformed face record"), "{err}");
    }

    #[test]
    fn test_negative_index_is_malformed() {
        let source = "\
ply
format ascii 1.0
element vertex 3
property float x
element face 1
property list uchar int vertex_index
end_header
0
1
2
3 0 -1 2
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("malformed face record"), "{err}");
    }

    #[test]
    fn test_ascii_data_saturates_to_declared_type() {
        let source = "\
ply
format ascii 1.0
element vertex 2
property uchar red
element face 0
property list uchar int vertex_index
end_header
300
-4
";
        let mesh = read_ascii(source).unwrap();
        assert_eq!(mesh.attribute(0, AttributeKind::ColorR).unwrap(), 255.0);
        assert_eq!(mesh.attribute(1, AttributeKind::ColorR).unwrap(), 0.0);
    }

    #[test]
    fn test_bad_magic() {
        let err = read_ascii("py\nformat ascii 1.0\nend_header\n").unwrap_err();
        assert!(err.message().contains("magic"), "{err}");
    }

    #[test]
    fn test_unknown_encoding_version() {
        let err = read_ascii("ply\nformat ascii 9.9\nend_header\n").unwrap_err();
        assert!(err.message().contains("encoding-version"), "{err}");
    }

    #[test]
    fn test_unknown_vertex_property() {
        let source = "\
ply
format ascii 1.0
element vertex 1
property float intensity
end_header
0
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("unrecognised vertex property"), "{err}");
    }

    #[test]
    fn test_unknown_property_type() {
        let source = "\
ply
format ascii 1.0
element vertex 1
property double x
end_header
0
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("unrecognised vertex property"), "{err}");
    }

    #[test]
    fn test_missing_vertex_element() {
        let source = "\
ply
format ascii 1.0
element face 0
property list uchar int vertex_index
end_header
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("failed to read vertex data"), "{err}");
    }

    #[test]
    fn test_missing_face_list_declaration() {
        let source = "\
ply
format ascii 1.0
element vertex 0
end_header
";
        let err = read_ascii(source).unwrap_err();
        assert!(err.message().contains("failed to read face indices"), "{err}");
    }

    #[test]
    fn test_unknown_element_properties_are_ignored() {
        let source = "\
ply
format ascii 1.0
element vertex 1
property float x
element edge 0
property int vertex1
element face 0
property list uchar int vertex_index
end_header
7
";
        let mesh = read_ascii(source).unwrap();
        assert_eq!(mesh.attribute(0, AttributeKind::PositionX).unwrap(), 7.0);
    }

    #[test]
    fn test_write_strides_faces_by_three() {
        let mut raw = RawMesh::new();
        raw.set_vertex_count(6);
        for vertex in 0..6 {
            raw.set_attribute_datum(AttributeKind::PositionX, vertex, vertex as f32)
                .unwrap();
        }
        raw.set_triangle(0, [0, 1, 2]);
        raw.set_triangle(1, [3, 4, 5]);

        let mut bytes = Vec::new();
        PlyFormat::ascii_1_0().write_raw(&raw, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        // Consecutive faces come from disjoint index triples, never a
        // stride-1 window over the flat array.
        assert!(text.contains("3 0 1 2\n3 3 4 5\n"), "{text}");
    }

    #[test]
    fn test_written_header_shape() {
        let store = unit_triangle_store();
        let mut bytes = Vec::new();
        write_mesh(&PlyFormat::ascii_1_0(), &store, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let expected = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_index
end_header
";
        assert!(text.starts_with(expected), "{text}");
    }

    #[test]
    fn test_quad_store_writes_as_triangles() {
        use meshio_core::topology::IndexTopology;
        let mut store = MeshStore::new();
        store.set_layout(AttributeLayout::with_kinds(&[AttributeKind::PositionX]).unwrap());
        store.set_topology(IndexTopology::Quad);
        store.set_vertex_count(4);
        store.set_face_count(1);
        store.set_face_slots(0, &[0, 1, 2, 3]).unwrap();

        // Writing goes through the explicit triangle expansion.
        let raw = store.to_raw().unwrap();
        let mut bytes = Vec::new();
        PlyFormat::ascii_1_0().write_raw(&raw, &mut bytes).unwrap();

        let mut builder = MeshStore::new();
        let back = build_mesh(&mut builder, &PlyFormat::ascii_1_0()
            .read_raw(&mut Cursor::new(&bytes))
            .unwrap())
        .unwrap();
        assert_eq!(back.face_count(), 2);
        assert_eq!(back.face_slots(0).unwrap(), &[0, 1, 2]);
        assert_eq!(back.face_slots(1).unwrap(), &[0, 2, 3]);
    }
}
