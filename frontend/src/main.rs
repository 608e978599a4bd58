fn main() {
    corp_portal_frontend::boot();
}
