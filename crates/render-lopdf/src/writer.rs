use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use rollbook_render_core::RenderError;
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF incrementally. Objects go to the sink as they are produced;
/// the resources, page tree, catalog and info dictionary are held back and
/// written together with the cross-reference table on `finish`.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    offsets: BTreeMap<u32, u64>,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writeln!(writer, "%PDF-{}", version)?;
        writer.write_all(b"%\xE2\xE3\xCF\xD3\n")?;

        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        Ok(Self {
            writer,
            offsets: BTreeMap::new(),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            info: None,
            buffered_objects,
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    /// Writes `object` to the sink right away under a fresh id.
    pub fn write_object(&mut self, object: Object) -> io::Result<ObjectId> {
        let id = self.new_object_id();
        self.write_indirect(id, &object)?;
        Ok(id)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.write_object(Object::Stream(stream))?)
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog_dict.into());

        let info_id = match self.info.take() {
            Some(info) => {
                let id = self.new_object_id();
                self.buffered_objects.insert(id, info.into());
                Some(id)
            }
            None => None,
        };

        for (id, object) in std::mem::take(&mut self.buffered_objects) {
            self.write_indirect(id, &object)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.write_xref()?;

        let mut trailer = dictionary! { "Size" => i64::from(self.max_id) + 1, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        serialize::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_indirect(&mut self, id: ObjectId, object: &Object) -> io::Result<()> {
        let offset = self.writer.stream_position()?;
        self.offsets.insert(id.0, offset);
        log::trace!("Writing object {} at offset {}", id.0, offset);
        writeln!(self.writer, "{} {} obj", id.0, id.1)?;
        serialize::write_object(&mut self.writer, object)?;
        writeln!(self.writer, "\nendobj")?;
        Ok(())
    }

    /// A single xref subsection covering every id up to `max_id`. Ids that
    /// were allocated but never written are listed as free.
    fn write_xref(&mut self) -> io::Result<()> {
        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {}", self.max_id + 1)?;
        self.writer.write_all(b"0000000000 65535 f \n")?;
        for id in 1..=self.max_id {
            match self.offsets.get(&id) {
                Some(offset) => write!(self.writer, "{:010} 00000 n \n", offset)?,
                None => self.writer.write_all(b"0000000000 00000 f \n")?,
            }
        }
        Ok(())
    }
}

mod serialize {
    use lopdf::{Dictionary, Object, StringFormat};
    use std::io::{self, Write};

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, StringFormat::Literal) => {
                writer.write_all(b"(")?;
                for &byte in s {
                    if matches!(byte, b'(' | b')' | b'\\') {
                        writer.write_all(b"\\")?;
                    }
                    writer.write_all(&[byte])?;
                }
                writer.write_all(b")")
            }
            Object::String(s, StringFormat::Hexadecimal) => {
                writer.write_all(b"<")?;
                for byte in s {
                    write!(writer, "{:02X}", byte)?;
                }
                writer.write_all(b">")
            }
            Object::Array(items) => {
                writer.write_all(b"[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, item)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        for (key, value) in dict.iter() {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }
}
