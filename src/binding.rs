//! N-API surface: registers `GetStringRegKey` and `GetDWORDRegKey` on the
//! module's exports when Node loads the addon.

use napi::{CallContext, Env, JsObject, JsString, JsUnknown, ValueType};
use napi_derive::{js_function, module_exports};

use crate::args::CallArgs;
use crate::error::{Error, Result};

fn host(err: napi::Error) -> Error {
    Error::Host(err.reason)
}

impl CallArgs for CallContext<'_> {
    fn count(&self) -> usize {
        self.length
    }

    fn is_text(&self, index: usize) -> Result<bool> {
        let arg = self.get::<JsUnknown>(index).map_err(host)?;
        Ok(arg.get_type().map_err(host)? == ValueType::String)
    }

    fn text_len(&self, index: usize) -> Result<usize> {
        self.get::<JsString>(index)
            .and_then(|arg| arg.utf8_len())
            .map_err(host)
    }

    fn text(&self, index: usize) -> Result<String> {
        self.get::<JsString>(index)
            .and_then(|arg| arg.into_utf8())
            .and_then(|utf8| utf8.into_owned())
            .map_err(host)
    }
}

/// Throws `err` into the calling script. The return value is ignored by
/// Node while an exception is pending.
fn throw(env: &Env, err: &Error) -> napi::Result<JsUnknown> {
    env.throw_error(&err.to_string(), err.code())?;
    env.get_undefined().map(|undefined| undefined.into_unknown())
}

#[js_function(3)]
fn get_string_reg_key(ctx: CallContext) -> napi::Result<JsUnknown> {
    match crate::get_string_reg_key(&ctx) {
        Ok(Some(text)) => ctx.env.create_string(&text).map(|text| text.into_unknown()),
        Ok(None) => ctx.env.get_undefined().map(|undefined| undefined.into_unknown()),
        Err(err) => throw(ctx.env, &err),
    }
}

#[js_function(3)]
fn get_dword_reg_key(ctx: CallContext) -> napi::Result<JsUnknown> {
    match crate::get_dword_reg_key(&ctx) {
        Ok(Some(value)) => ctx.env.create_uint32(value).map(|value| value.into_unknown()),
        Ok(None) => ctx.env.get_undefined().map(|undefined| undefined.into_unknown()),
        Err(err) => throw(ctx.env, &err),
    }
}

#[module_exports]
fn init(mut exports: JsObject) -> napi::Result<()> {
    exports.create_named_method("GetStringRegKey", get_string_reg_key)?;
    exports.create_named_method("GetDWORDRegKey", get_dword_reg_key)?;

    Ok(())
}
