use primer_demo::Variant;

fn main() {
    primer_demo::launch(Variant::Quad);
}
