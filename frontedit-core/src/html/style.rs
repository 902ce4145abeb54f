/// Stylesheet appended after the form when `form.include_styles` is set
pub const EDITOR_STYLES: &str = r#"<style>
    .cpt-editor {
        max-width: 720px;
        background: #fff;
        padding: 32px;
        border-radius: 12px;
        box-shadow: 0 20px 40px rgba(0,0,0,.05);
        font-family: system-ui;
    }
    .cpt-editor label {
        font-weight: 600;
        margin-top: 20px;
        display: block;
    }
    .cpt-editor input,
    .cpt-editor textarea,
    .cpt-editor select {
        width: 100%;
        padding: 10px;
        margin-top: 6px;
        border-radius: 8px;
        border: 1px solid #ddd;
    }
    .cpt-editor .acf-field {
        margin-top: 20px;
    }
    .cpt-editor .inline {
        display: inline-block;
        margin-right: 12px;
        font-weight: 400;
    }
    .cpt-editor .inline input {
        width: auto;
    }
    .cpt-editor button {
        margin-top: 30px;
        padding: 12px 20px;
        border-radius: 10px;
        background: #4f46e5;
        color: #fff;
        border: none;
        font-size: 15px;
        cursor: pointer;
    }
</style>
"#;
