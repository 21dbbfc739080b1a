use common::format::{format_kilobytes, format_number};
use common::model::{UploadResult, UPLOAD_COLUMNS};
use common::view::LoadState;
use web_sys::{DragEvent, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::UploadPage;
use crate::components::ui::{
    BadgeStatus, Button, ButtonVariant, Card, Header, Notice, NoticeKind, StatusBadge,
};

pub fn view(component: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    let uploading = component.upload.is_loading();
    let show_reset = component.file.is_some()
        || component.error().is_some()
        || matches!(component.upload, LoadState::Loaded(_));

    html! {
        <>
            <Header title="Carga de Datos" subtitle="Importar transacciones desde archivo Excel o CSV" />
            <div class="content">
                <div class="narrower">
                    { build_format_card() }

                    <Card title="Subir Archivo" description="Arrastra el archivo o haz clic para seleccionarlo">
                        { build_dropzone(component, link) }

                        if let Some(message) = component.error() {
                            <Notice kind={NoticeKind::Error}>{ format!("✖ {}", message) }</Notice>
                        }
                        if let Some(result) = component.upload.data() {
                            { build_result(result) }
                        }

                        <div class="actions">
                            <Button
                                disabled={component.file.is_none()}
                                loading={uploading}
                                onclick={link.callback(|_| Msg::Upload)}
                            >
                                { if uploading { "Procesando..." } else { "⇪ Subir y Procesar" } }
                            </Button>
                            if show_reset {
                                <Button variant={ButtonVariant::Outline} onclick={link.callback(|_| Msg::Reset)}>
                                    { "Limpiar" }
                                </Button>
                            }
                        </div>
                    </Card>
                </div>
            </div>
        </>
    }
}

fn build_format_card() -> Html {
    html! {
        <Card
            title="Formato del Archivo"
            description="El archivo debe contener las siguientes columnas en el orden especificado"
        >
            <div class="columns">{ UPLOAD_COLUMNS.join(", ") }</div>
            <div class="formats">
                <StatusBadge status={BadgeStatus::Success}>{ "CSV (.csv)" }</StatusBadge>
                <StatusBadge status={BadgeStatus::Success}>{ "Excel (.xlsx, .xls)" }</StatusBadge>
            </div>
        </Card>
    }
}

fn build_dropzone(component: &UploadPage, link: &Scope<UploadPage>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.files().and_then(|files| files.get(0)).map(Msg::Pick)
    });
    let ondrop = link.batch_callback(|e: DragEvent| {
        e.prevent_default();
        e.data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
            .map(Msg::Pick)
    });
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

    html! {
        <div
            class={classes!("dropzone", component.file.is_some().then_some("selected"))}
            onclick={link.callback(|_| Msg::OpenPicker)}
            {ondrop}
            {ondragover}
        >
            <input
                ref={component.file_input_ref.clone()}
                class="hidden"
                type="file"
                accept=".csv,.xlsx,.xls"
                {onchange}
            />
            if let Some(file) = &component.file {
                <p style="font-size: 2.5rem;">{ "📄" }</p>
                <p class="strong">{ file.name() }</p>
                <p class="muted small">{ format_kilobytes(file.size()) }</p>
            } else {
                <p style="font-size: 2.5rem;">{ "⇪" }</p>
                <p class="strong">{ "Arrastra tu archivo aquí" }</p>
                <p class="muted small">{ "o haz clic para seleccionar" }</p>
            }
        </div>
    }
}

fn build_result(result: &UploadResult) -> Html {
    html! {
        <Notice kind={NoticeKind::Success}>
            <p class="strong">{ "✔ ¡Archivo procesado exitosamente!" }</p>
            <div class="grid grid-3">
                <div class="rule-tile">
                    <p class="muted">{ "Registros procesados" }</p>
                    <p class="big">{ format_number(result.processed_records) }</p>
                </div>
                <div class="rule-tile">
                    <p class="muted">{ "Clientes actualizados" }</p>
                    <p class="big">{ format_number(result.updated_customers) }</p>
                </div>
                <div class="rule-tile">
                    <p class="muted">{ "Usuarios actualizados" }</p>
                    <p class="big">{ format_number(result.updated_users) }</p>
                </div>
            </div>
            if !result.warnings.is_empty() {
                <p class="strong">{ format!("⚠ Advertencias ({})", result.warnings.len()) }</p>
                <div class="warnings">
                    { for result.warnings.iter().map(|warning| html! { <p>{ format!("• {}", warning) }</p> }) }
                </div>
            }
        </Notice>
    }
}
